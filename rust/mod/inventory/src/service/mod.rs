pub mod activity;
pub mod device;
pub mod filter;
pub mod script;
pub mod security;
pub mod stats;
pub mod ticket;

use std::sync::Arc;

use serde::Serialize;

use crate::model::ActivityEvent;
use crate::store::Inventory;

pub use filter::{DeviceQuery, Selector, TicketQuery, filter_devices, filter_scripts, filter_tickets};
pub use security::{
    ComplianceIssue, SecurityControl, SecurityOverview, SecurityPosture, Severity,
    compliance_issues, compute_security_posture, non_compliant_devices,
};
pub use stats::{
    DeviceStats, LabelCount, compute_compliance_distribution, compute_device_stats,
    compute_os_distribution, compute_status_distribution,
};

/// Binds the pure query functions to one shared,
/// immutable store.
///
/// Cheap to clone; every clone reads the same `Inventory`.
#[derive(Debug, Clone)]
pub struct InventoryService {
    pub(crate) inventory: Arc<Inventory>,
}

/// Everything the dashboard landing view shows.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub stats: DeviceStats,
    pub os_distribution: Vec<LabelCount>,
    pub compliance_distribution: Vec<LabelCount>,
    pub status_distribution: Vec<LabelCount>,
    pub recent_activity: Vec<ActivityEvent>,
}

impl InventoryService {
    pub fn new(inventory: Arc<Inventory>) -> Self {
        Self { inventory }
    }

    // ── Aggregations ──

    pub fn device_stats(&self) -> DeviceStats {
        compute_device_stats(self.inventory.devices(), self.inventory.tickets())
    }

    pub fn os_distribution(&self) -> Vec<LabelCount> {
        compute_os_distribution(self.inventory.devices())
    }

    pub fn compliance_distribution(&self) -> [LabelCount; 3] {
        compute_compliance_distribution(self.inventory.devices())
    }

    pub fn status_distribution(&self) -> [LabelCount; 4] {
        compute_status_distribution(self.inventory.devices())
    }

    pub fn dashboard(&self, activity_limit: usize) -> Dashboard {
        Dashboard {
            stats: self.device_stats(),
            os_distribution: self.os_distribution(),
            compliance_distribution: self.compliance_distribution().into(),
            status_distribution: self.status_distribution().into(),
            recent_activity: self.recent_activity(activity_limit),
        }
    }
}
