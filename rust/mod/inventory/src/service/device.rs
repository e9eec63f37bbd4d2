use serde::Serialize;
use tracing::debug;

use devicehub_core::{ListParams, ListResult, ServiceError};

use crate::model::{ActivityEvent, Device};

use super::filter::{DeviceQuery, filter_devices};
use super::security::{ComplianceIssue, compliance_issues};
use super::InventoryService;

/// A device with everything its detail view shows.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceDetail {
    pub device: Device,
    pub issues: Vec<ComplianceIssue>,
    pub activity: Vec<ActivityEvent>,
}

impl InventoryService {
    // ── Device (read-only, PK = id) ──

    pub fn get_device(&self, id: &str) -> Result<Device, ServiceError> {
        self.inventory
            .device(id)
            .cloned()
            .ok_or_else(|| ServiceError::NotFound(format!("device '{}' not found", id)))
    }

    /// Filter then paginate. `total` counts every match.
    pub fn list_devices(&self, query: &DeviceQuery, params: &ListParams) -> ListResult<Device> {
        let matched: Vec<Device> = filter_devices(self.inventory.devices(), query)
            .into_iter()
            .cloned()
            .collect();
        debug!(
            "list_devices: {} of {} devices match",
            matched.len(),
            self.inventory.devices().len()
        );
        ListResult::paginate(matched, params)
    }

    pub fn device_detail(&self, id: &str) -> Result<DeviceDetail, ServiceError> {
        let device = self.get_device(id)?;
        let issues = compliance_issues(&device);
        let activity = self.activity_for_device(&device.name);
        Ok(DeviceDetail {
            device,
            issues,
            activity,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::service::Selector;
    use crate::store::Inventory;

    fn service() -> InventoryService {
        InventoryService::new(Arc::new(Inventory::sample().unwrap()))
    }

    #[test]
    fn get_missing_device_is_not_found() {
        let err = service().get_device("DEV999").unwrap_err();
        assert_eq!(err.error_code(), "NOT_FOUND");
        assert!(err.to_string().contains("DEV999"));
    }

    #[test]
    fn list_devices_paginates_after_filtering() {
        let svc = service();
        let query = DeviceQuery {
            status: Selector::parse("Active"),
            ..Default::default()
        };
        let page = svc.list_devices(&query, &ListParams::new(Some(2), Some(1)));
        assert_eq!(page.total, 6);
        let ids: Vec<&str> = page.items.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["DEV002", "DEV003"]);
    }

    #[test]
    fn detail_collects_issues_and_activity() {
        let detail = service().device_detail("DEV004").unwrap();
        assert_eq!(detail.device.user, "James Rodriguez");
        assert_eq!(detail.issues.len(), 3);
        assert_eq!(detail.activity.len(), 1);
        assert_eq!(detail.activity[0].id, "ACT004");
    }

    #[test]
    fn detail_of_compliant_device_has_no_issues() {
        let detail = service().device_detail("DEV001").unwrap();
        assert!(detail.issues.is_empty());
        assert_eq!(detail.activity.len(), 1);
    }
}
