use serde::{Deserialize, Serialize};

/// A fleet-wide rule shown on the security overview.
/// PK = name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SecurityPolicy {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub enabled: bool,
    /// Grouping label, e.g. "Data Protection".
    pub category: String,
}
