//! Loading an inventory from a data directory on disk.

use std::fs;
use std::sync::Arc;

use devicehub_core::{ListParams, ServiceConfig};
use devicehub_inventory::service::DeviceQuery;
use devicehub_inventory::{Inventory, InventoryService};
use tempfile::TempDir;

const DEVICES_JSON: &str = r#"{
  "devices": [
    {
      "id": "LAB-1", "name": "lab-runner-01", "type": "Linux", "model": "NUC 13",
      "user": "CI", "status": "Active", "compliance": "Compliant",
      "lastCheckIn": "1 min ago", "location": "Lisbon, Portugal",
      "serialNumber": "NUC13-0001", "osVersion": "Ubuntu 24.04",
      "encryption": true, "firewall": true, "antivirus": false
    },
    {
      "id": "LAB-2", "name": "lab-mac-02", "type": "macOS", "model": "Mac mini M2",
      "user": "CI", "status": "Decommissioned", "compliance": "Non-Compliant",
      "lastCheckIn": "9 days ago", "location": "Lisbon, Portugal",
      "serialNumber": "MM2-0002", "osVersion": "macOS 13.6"
    }
  ]
}"#;

const TICKETS_TOML: &str = r#"
[[tickets]]
id = "T-1"
subject = "Runner offline"
user = "CI"
priority = "High"
status = "Waiting"
assignedTo = "Infra"
createdDate = "2024-02-01 08:00"

[[tickets]]
id = "T-2"
subject = "Old ticket"
user = "CI"
priority = "Low"
status = "Resolved"
assignedTo = "Infra"
createdDate = "2024-01-01 08:00"
"#;

fn write_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("devices.json"), DEVICES_JSON).unwrap();
    fs::write(tmp.path().join("tickets.toml"), TICKETS_TOML).unwrap();
    fs::write(tmp.path().join("README.md"), "fixtures for the lab fleet").unwrap();
    tmp
}

#[test]
fn loads_data_dir_and_aggregates() {
    let tmp = write_fixtures();
    let inventory = Inventory::load(&ServiceConfig::with_data_dir(tmp.path())).unwrap();
    assert_eq!(inventory.devices().len(), 2);
    assert!(inventory.scripts().is_empty());
    assert!(inventory.activities().is_empty());

    let svc = InventoryService::new(Arc::new(inventory));
    let stats = svc.device_stats();
    assert_eq!(stats.total, 2);
    assert_eq!(stats.online, 1);
    assert_eq!(stats.offline, 1);
    assert_eq!(stats.compliance_rate, 50);
    assert_eq!(stats.open_tickets, 1);

    let os: Vec<(String, usize)> = svc
        .os_distribution()
        .into_iter()
        .map(|b| (b.label, b.count))
        .collect();
    assert_eq!(os, vec![("Linux".to_string(), 1), ("macOS".to_string(), 1)]);

    let compliance = svc.compliance_distribution();
    assert_eq!(compliance.iter().map(|b| b.count).sum::<usize>(), 2);
}

#[test]
fn unknown_labels_filter_by_exact_text() {
    let tmp = write_fixtures();
    let inventory = Inventory::load(&ServiceConfig::with_data_dir(tmp.path())).unwrap();
    let svc = InventoryService::new(Arc::new(inventory));

    let page = svc.list_devices(
        &DeviceQuery::from_labels("", "Decommissioned", "all"),
        &ListParams::default(),
    );
    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].id, "LAB-2");

    let page = svc.list_devices(
        &DeviceQuery::from_labels("LISBON", "all", "Linux"),
        &ListParams::default(),
    );
    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].id, "LAB-1");
}

#[test]
fn malformed_fixture_reports_file() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("devices.toml"), "[[devices]]\nid = 42\n").unwrap();
    let err = Inventory::load(&ServiceConfig::with_data_dir(tmp.path())).unwrap_err();
    assert_eq!(err.error_code(), "STORAGE_ERROR");
    assert!(err.to_string().contains("devices.toml"));
}

#[test]
fn duplicate_ids_across_files_are_rejected() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("scripts.json"),
        r#"[
          {"id": "S1", "name": "a", "platform": "Both", "description": "", "lastModified": "", "language": "Bash"},
          {"id": "S1", "name": "b", "platform": "Both", "description": "", "lastModified": "", "language": "Bash"}
        ]"#,
    )
    .unwrap();
    let err = Inventory::load(&ServiceConfig::with_data_dir(tmp.path())).unwrap_err();
    assert_eq!(err.error_code(), "VALIDATION_FAILED");
}

#[test]
fn shipped_fixture_dir_matches_builtin_sample() {
    let dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures");
    let from_disk = Inventory::load(&ServiceConfig::with_data_dir(&dir)).unwrap();
    let builtin = Inventory::sample().unwrap();
    assert_eq!(from_disk.devices(), builtin.devices());
    assert_eq!(from_disk.tickets(), builtin.tickets());
    assert_eq!(from_disk.scripts(), builtin.scripts());
}
