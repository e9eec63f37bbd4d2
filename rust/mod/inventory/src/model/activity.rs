use serde::{Deserialize, Serialize};

labeled_enum! {
    /// Category tag of an activity event.
    pub enum ActivityKind {
        Enrollment => "enrollment",
        Compliance => "compliance",
        Deployment => "deployment",
        Alert => "alert",
        Update => "update",
    }
}

/// One entry in the fleet activity feed.
///
/// `device` and `user` hold names, not ids; they match `Device::name`
/// and `Device::user` by string equality.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ActivityEvent {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    pub device: String,
    pub user: String,
    pub timestamp: String,
    pub description: String,
}
