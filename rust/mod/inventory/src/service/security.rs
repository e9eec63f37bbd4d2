//! Security posture and per-device compliance issues.

use serde::Serialize;

use crate::badge::Tone;
use crate::model::{Compliance, Device, SecurityPolicy};

use super::InventoryService;
use super::stats::percent;

/// The three endpoint controls tracked per device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SecurityControl {
    Encryption,
    Firewall,
    Antivirus,
}

impl SecurityControl {
    pub const ALL: [SecurityControl; 3] = [Self::Encryption, Self::Firewall, Self::Antivirus];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Encryption => "Disk Encryption",
            Self::Firewall => "Firewall",
            Self::Antivirus => "Antivirus",
        }
    }

    pub fn is_enabled(&self, device: &Device) -> bool {
        match self {
            Self::Encryption => device.encryption,
            Self::Firewall => device.firewall,
            Self::Antivirus => device.antivirus,
        }
    }

    /// Word shown next to the control for a device.
    pub fn state_label(&self, enabled: bool) -> &'static str {
        match (self, enabled) {
            (Self::Encryption, true) => "Enabled",
            (Self::Encryption, false) => "Disabled",
            (Self::Firewall, true) => "Active",
            (Self::Firewall, false) => "Inactive",
            (Self::Antivirus, true) => "Protected",
            (Self::Antivirus, false) => "Not Protected",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Severity {
    High,
    Medium,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            Self::High => Tone::Danger,
            Self::Medium => Tone::Warning,
        }
    }
}

/// A disabled control on a device that is not Compliant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceIssue {
    pub control: SecurityControl,
    pub severity: Severity,
    pub title: &'static str,
    pub remedy: &'static str,
}

impl ComplianceIssue {
    fn for_control(control: SecurityControl) -> Self {
        match control {
            SecurityControl::Encryption => Self {
                control,
                severity: Severity::High,
                title: "Disk encryption not enabled",
                remedy: "Enable FileVault/BitLocker to secure data at rest",
            },
            SecurityControl::Firewall => Self {
                control,
                severity: Severity::High,
                title: "Firewall disabled",
                remedy: "Enable system firewall to protect against network threats",
            },
            SecurityControl::Antivirus => Self {
                control,
                severity: Severity::Medium,
                title: "Antivirus not installed",
                remedy: "Deploy enterprise antivirus solution",
            },
        }
    }
}

/// Issues for one device: empty when Compliant, otherwise one per
/// disabled control (encryption, firewall, antivirus).
pub fn compliance_issues(device: &Device) -> Vec<ComplianceIssue> {
    if device.is_compliant() {
        return Vec::new();
    }
    SecurityControl::ALL
        .into_iter()
        .filter(|c| !c.is_enabled(device))
        .map(ComplianceIssue::for_control)
        .collect()
}

/// How many devices have one control enabled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlCoverage {
    pub control: SecurityControl,
    pub enabled: usize,
    pub total: usize,
}

/// Fleet security posture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityPosture {
    pub total: usize,
    pub compliant: usize,
    /// Percentage of Compliant devices, same rounding as the dashboard.
    pub compliance_score: u8,
    /// Encryption, firewall, antivirus, in that order.
    pub coverage: Vec<ControlCoverage>,
}

pub fn compute_security_posture(devices: &[Device]) -> SecurityPosture {
    let total = devices.len();
    let compliant = devices.iter().filter(|d| d.is_compliant()).count();
    let coverage = SecurityControl::ALL
        .into_iter()
        .map(|control| ControlCoverage {
            control,
            enabled: devices.iter().filter(|d| control.is_enabled(d)).count(),
            total,
        })
        .collect();

    SecurityPosture {
        total,
        compliant,
        compliance_score: percent(compliant, total),
        coverage,
    }
}

/// Devices whose compliance is exactly Non-Compliant. Warning and
/// Unknown devices are not included.
pub fn non_compliant_devices(devices: &[Device]) -> Vec<&Device> {
    devices
        .iter()
        .filter(|d| d.compliance == Compliance::NonCompliant)
        .collect()
}

/// A Non-Compliant device paired with its issues.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NonCompliantDevice {
    pub device: Device,
    pub issues: Vec<ComplianceIssue>,
}

/// Everything the security view shows.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityOverview {
    pub posture: SecurityPosture,
    pub policies: Vec<SecurityPolicy>,
    pub non_compliant: Vec<NonCompliantDevice>,
}

impl InventoryService {
    pub fn security_overview(&self) -> SecurityOverview {
        let devices = self.inventory.devices();
        SecurityOverview {
            posture: compute_security_posture(devices),
            policies: self.inventory.policies().to_vec(),
            non_compliant: non_compliant_devices(devices)
                .into_iter()
                .map(|d| NonCompliantDevice {
                    device: d.clone(),
                    issues: compliance_issues(d),
                })
                .collect(),
        }
    }
}
