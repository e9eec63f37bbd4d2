//! `config show` / `config init`.

use std::path::Path;

use anyhow::Result;

use crate::config::ClientConfig;
use crate::render::{OutputFormat, print_json};

pub fn show(config: &ClientConfig, path: &Path, output: OutputFormat) -> Result<()> {
    if output == OutputFormat::Json {
        return print_json(config);
    }

    let exists = if path.exists() { "" } else { " (not found, using defaults)" };
    println!("Config file: {}{}", path.display(), exists);
    println!(
        "  {:<10} {}",
        "data-dir",
        config.data_dir.as_deref().unwrap_or("(built-in sample)")
    );
    println!(
        "  {:<10} {}",
        "output",
        match config.output.unwrap_or_default() {
            OutputFormat::Table => "table",
            OutputFormat::Json => "json",
        }
    );
    match config.page_size {
        Some(n) => println!("  {:<10} {}", "page-size", n),
        None => println!("  {:<10} (default)", "page-size"),
    }
    println!("  {:<10} {}", "log", config.log_filter());
    Ok(())
}

pub fn init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite.",
            path.display()
        );
    }
    ClientConfig::starter().save(path)?;
    println!("Wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_refuses_to_overwrite() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");

        init(&path, false).unwrap();
        assert_eq!(ClientConfig::load(&path).unwrap(), ClientConfig::starter());

        let err = init(&path, false).unwrap_err();
        assert!(err.to_string().contains("--force"));
        init(&path, true).unwrap();
    }

    #[test]
    fn show_without_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("missing.toml");
        show(&ClientConfig::default(), &path, OutputFormat::Table).unwrap();
    }
}
