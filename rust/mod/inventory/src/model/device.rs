use serde::{Deserialize, Serialize};

labeled_enum! {
    /// Operating-system family of a device.
    pub enum DeviceType {
        MacOs => "macOS",
        Windows => "Windows",
        Ios => "iOS",
        Android => "Android",
    }
}

labeled_enum! {
    /// Lifecycle status of a device.
    pub enum DeviceStatus {
        Active => "Active",
        PendingSetup => "Pending Setup",
        Offline => "Offline",
        NeedsAttention => "Needs Attention",
    }
}

labeled_enum! {
    /// Result of the last compliance evaluation.
    pub enum Compliance {
        Compliant => "Compliant",
        NonCompliant => "Non-Compliant",
        Warning => "Warning",
    }
}

/// A single enrolled endpoint.
/// PK = id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    /// Device identifier, unique within the fleet.
    pub id: String,

    /// Host name shown in the inventory (e.g. "MacBook-Sarah-Marketing").
    pub name: String,

    #[serde(rename = "type")]
    pub device_type: DeviceType,

    /// Hardware model (e.g. "MacBook Pro 16\" M3").
    pub model: String,

    /// Assigned user's display name.
    pub user: String,

    pub status: DeviceStatus,
    pub compliance: Compliance,

    /// Free-text recency ("2 mins ago"). Not parsed.
    pub last_check_in: String,

    pub location: String,
    pub serial_number: String,

    /// Full OS version string (e.g. "macOS 14.2").
    pub os_version: String,

    /// Disk encryption (FileVault/BitLocker) enabled.
    #[serde(default)]
    pub encryption: bool,

    #[serde(default)]
    pub firewall: bool,

    #[serde(default)]
    pub antivirus: bool,

    #[serde(default)]
    pub lat: f64,

    #[serde(default)]
    pub lng: f64,
}

impl Device {
    /// A device counts as online only while Active.
    pub fn is_online(&self) -> bool {
        self.status == DeviceStatus::Active
    }

    pub fn is_compliant(&self) -> bool {
        self.compliance == Compliance::Compliant
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> &'static str {
        r#"{
            "id": "DEV002",
            "name": "DESKTOP-Mike-Dev",
            "type": "Windows",
            "model": "Dell Latitude 5430",
            "user": "Mike Chen",
            "status": "Active",
            "compliance": "Warning",
            "lastCheckIn": "15 mins ago",
            "location": "Singapore",
            "serialNumber": "DLAT543012345",
            "osVersion": "Windows 11 Pro",
            "encryption": true,
            "firewall": true,
            "antivirus": false,
            "lat": 1.3521,
            "lng": 103.8198
        }"#
    }

    #[test]
    fn device_decodes_camel_case_fields() {
        let d: Device = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(d.device_type, DeviceType::Windows);
        assert_eq!(d.serial_number, "DLAT543012345");
        assert_eq!(d.compliance, Compliance::Warning);
        assert!(d.is_online());
        assert!(!d.is_compliant());
        assert!(!d.antivirus);
    }

    #[test]
    fn unknown_labels_are_kept_verbatim() {
        let json = sample_json()
            .replace("\"Active\"", "\"Retired\"")
            .replace("\"Windows\",", "\"Linux\",");
        let d: Device = serde_json::from_str(&json).unwrap();
        assert_eq!(d.status, DeviceStatus::Unknown("Retired".into()));
        assert_eq!(d.device_type, DeviceType::Unknown("Linux".into()));
        assert!(!d.is_online());

        let back = serde_json::to_value(&d).unwrap();
        assert_eq!(back["status"], "Retired");
        assert_eq!(back["type"], "Linux");
    }

    #[test]
    fn labels_match_display_text() {
        assert_eq!(DeviceStatus::PendingSetup.to_string(), "Pending Setup");
        assert_eq!(DeviceStatus::from_label("Needs Attention"), DeviceStatus::NeedsAttention);
        assert_eq!(Compliance::from("Non-Compliant"), Compliance::NonCompliant);
        assert_eq!(DeviceType::MacOs.as_str(), "macOS");
        assert_eq!(DeviceType::KNOWN.len(), 4);
        assert_eq!(format!("{:<5}|", DeviceType::Ios), "iOS  |");
    }

    #[test]
    fn labels_are_case_sensitive() {
        assert!(DeviceStatus::from_label("active").is_unknown());
        assert!(DeviceType::from_label("MacOS").is_unknown());
    }
}
