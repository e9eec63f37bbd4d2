//! Plain-text rendering helpers shared by the commands.

use std::fmt::Display;

use clap::ValueEnum;
use devicehub_core::ServiceError;
use devicehub_inventory::{Tone, Toned};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Machine-readable body for a library error, `None` for anything else
/// (config or I/O problems in the CLI itself).
pub fn error_json(err: &anyhow::Error) -> Option<serde_json::Value> {
    err.downcast_ref::<ServiceError>().map(ServiceError::to_json)
}

/// Marker glyph for a tone.
pub fn glyph(tone: Tone) -> char {
    match tone {
        Tone::Success => '+',
        Tone::Warning => '!',
        Tone::Danger => 'x',
        Tone::Primary => '*',
        Tone::Muted => '-',
    }
}

/// A status label prefixed with its tone glyph, e.g. `+ Active`.
pub fn badge<T: Toned + Display>(value: &T) -> String {
    format!("{} {}", glyph(value.tone()), value)
}

/// Truncate to `width` characters, marking the cut with `~`.
pub fn clip(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        return s.to_string();
    }
    let mut out: String = s.chars().take(width.saturating_sub(1)).collect();
    out.push('~');
    out
}

/// Horizontal bar proportional to `count / max`.
pub fn bar(count: usize, max: usize, width: usize) -> String {
    if max == 0 {
        return String::new();
    }
    "#".repeat(count * width / max)
}
