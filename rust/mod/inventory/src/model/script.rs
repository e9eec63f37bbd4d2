use serde::{Deserialize, Serialize};

labeled_enum! {
    /// Platform a script targets.
    pub enum ScriptPlatform {
        Windows => "Windows",
        MacOs => "macOS",
        Both => "Both",
    }
}

labeled_enum! {
    pub enum ScriptLanguage {
        PowerShell => "PowerShell",
        Bash => "Bash",
        Python => "Python",
    }
}

labeled_enum! {
    /// Outcome of a past script run.
    pub enum ExecutionResult {
        Success => "Success",
        Partial => "Partial",
        Failed => "Failed",
    }
}

/// An automation script in the catalogue. Scripts are stored
/// and displayed, never executed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Script {
    pub id: String,
    pub name: String,
    pub platform: ScriptPlatform,
    pub description: String,
    pub last_modified: String,
    pub language: ScriptLanguage,
    #[serde(default)]
    pub code: String,
}

impl Script {
    /// Whether the script is usable on `platform`. `Both` scripts run
    /// everywhere; an Unknown platform only matches itself.
    pub fn runs_on(&self, platform: &ScriptPlatform) -> bool {
        self.platform == *platform
            || (self.platform == ScriptPlatform::Both && !platform.is_unknown())
    }
}

/// A historical script run from the execution log.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionRecord {
    pub id: String,
    /// Script name, matched against `Script::name`.
    pub script_name: String,
    /// Free-text target description ("12 devices").
    pub target_devices: String,
    pub executed_by: String,
    pub timestamp: String,
    pub result: ExecutionResult,
}
