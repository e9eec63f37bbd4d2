//! Client-side settings.
//!
//! Reads/writes `~/.devicehub/config.toml`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::render::OutputFormat;

/// Client configuration file. Every field is optional; command-line
/// flags take precedence over anything set here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ClientConfig {
    /// Fixture directory. Unset means the built-in sample fleet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<String>,

    /// Default output format.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<OutputFormat>,

    /// Rows per page for `devices` when `--limit` is omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<usize>,

    /// Log filter directive used when `RUST_LOG` is not set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log: Option<String>,
}

impl ClientConfig {
    /// Default config file path: ~/.devicehub/config.toml.
    pub fn default_path() -> PathBuf {
        dirs_path().join("config.toml")
    }

    /// Load config from disk, or return default if file doesn't exist.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: ClientConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("invalid config {}: {}", path.display(), e))?;
        if config.page_size == Some(0) {
            anyhow::bail!("invalid config {}: page-size must be at least 1", path.display());
        }
        Ok(config)
    }

    /// Save config to disk.
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Starter config written by `devicehub config init`.
    pub fn starter() -> Self {
        Self {
            data_dir: None,
            output: Some(OutputFormat::Table),
            page_size: Some(50),
            log: Some("warn".to_string()),
        }
    }

    /// Log filter to fall back on when `RUST_LOG` is unset.
    pub fn log_filter(&self) -> &str {
        self.log.as_deref().unwrap_or("warn")
    }
}

/// Return the DeviceHub config directory (~/.devicehub).
fn dirs_path() -> PathBuf {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(".devicehub")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_default() {
        let tmp = tempfile::TempDir::new().unwrap();
        let config = ClientConfig::load(&tmp.path().join("config.toml")).unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.log_filter(), "warn");
    }

    #[test]
    fn test_save_and_load() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("nested").join("config.toml");
        let config = ClientConfig {
            data_dir: Some("/srv/fleet".to_string()),
            output: Some(OutputFormat::Json),
            page_size: Some(20),
            log: Some("devicehub_inventory=debug".to_string()),
        };
        config.save(&path).unwrap();

        let back = ClientConfig::load(&path).unwrap();
        assert_eq!(back, config);
        assert_eq!(back.log_filter(), "devicehub_inventory=debug");
    }

    #[test]
    fn test_kebab_case_keys() {
        let config: ClientConfig =
            toml::from_str("data-dir = \"./fixtures\"\noutput = \"json\"\n").unwrap();
        assert_eq!(config.data_dir.as_deref(), Some("./fixtures"));
        assert_eq!(config.output, Some(OutputFormat::Json));
        assert!(config.log.is_none());
        assert!(config.page_size.is_none());
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "page-size = 0\n").unwrap();
        let err = ClientConfig::load(&path).unwrap_err();
        assert!(err.to_string().contains("page-size must be at least 1"));

        std::fs::write(&path, "page-size = 1\n").unwrap();
        assert_eq!(ClientConfig::load(&path).unwrap().page_size, Some(1));
    }

    #[test]
    fn test_invalid_file_names_path() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "output = 3\n").unwrap();
        let err = ClientConfig::load(&path).unwrap_err();
        assert!(err.to_string().contains("config.toml"));
    }
}
