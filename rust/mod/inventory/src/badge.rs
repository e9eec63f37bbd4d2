//! Semantic display tones for status labels.
//!
//! Front ends map a [`Tone`] to whatever styling they have (colours,
//! glyphs). Unknown labels always render Muted.

use serde::Serialize;

use crate::model::{
    Compliance, DeviceStatus, ExecutionResult, ScriptLanguage, ScriptPlatform, TicketPriority,
    TicketStatus,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Success,
    Warning,
    Danger,
    Primary,
    Muted,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
            Self::Primary => "primary",
            Self::Muted => "muted",
        }
    }
}

/// Anything with a display tone.
pub trait Toned {
    fn tone(&self) -> Tone;
}

impl Toned for DeviceStatus {
    fn tone(&self) -> Tone {
        match self {
            Self::Active => Tone::Success,
            Self::PendingSetup => Tone::Warning,
            Self::NeedsAttention => Tone::Danger,
            Self::Offline | Self::Unknown(_) => Tone::Muted,
        }
    }
}

impl Toned for Compliance {
    fn tone(&self) -> Tone {
        match self {
            Self::Compliant => Tone::Success,
            Self::NonCompliant => Tone::Danger,
            Self::Warning => Tone::Warning,
            Self::Unknown(_) => Tone::Muted,
        }
    }
}

impl Toned for TicketPriority {
    fn tone(&self) -> Tone {
        match self {
            Self::Urgent => Tone::Danger,
            Self::High => Tone::Warning,
            Self::Normal => Tone::Primary,
            Self::Low | Self::Unknown(_) => Tone::Muted,
        }
    }
}

impl Toned for TicketStatus {
    fn tone(&self) -> Tone {
        match self {
            Self::New => Tone::Primary,
            Self::InProgress => Tone::Warning,
            Self::Resolved => Tone::Success,
            Self::Waiting | Self::Unknown(_) => Tone::Muted,
        }
    }
}

impl Toned for ScriptPlatform {
    fn tone(&self) -> Tone {
        match self {
            Self::Windows => Tone::Primary,
            Self::Both => Tone::Success,
            Self::MacOs | Self::Unknown(_) => Tone::Muted,
        }
    }
}

impl Toned for ScriptLanguage {
    fn tone(&self) -> Tone {
        match self {
            Self::PowerShell => Tone::Primary,
            Self::Bash => Tone::Success,
            Self::Python => Tone::Warning,
            Self::Unknown(_) => Tone::Muted,
        }
    }
}

impl Toned for ExecutionResult {
    fn tone(&self) -> Tone {
        match self {
            Self::Success => Tone::Success,
            Self::Partial => Tone::Warning,
            Self::Failed => Tone::Danger,
            Self::Unknown(_) => Tone::Muted,
        }
    }
}
