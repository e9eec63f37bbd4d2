//! Fleet-wide aggregations behind the dashboard metric cards and charts.
//!
//! Every function here is a pure, single pass over the slices it is
//! given. None of them can fail.

use serde::Serialize;

use crate::model::{Compliance, Device, DeviceStatus, Ticket};

/// Headline numbers for the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceStats {
    pub total: usize,
    /// Devices whose status is Active.
    pub online: usize,
    /// `total - online`.
    pub offline: usize,
    /// Percentage of Compliant devices, 0..=100.
    pub compliance_rate: u8,
    /// Tickets not Resolved.
    pub open_tickets: usize,
}

/// One bucket of a distribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelCount {
    pub label: String,
    pub count: usize,
}

impl LabelCount {
    pub fn new(label: impl Into<String>, count: usize) -> Self {
        Self {
            label: label.into(),
            count,
        }
    }
}

/// Integer percentage of `part` in `total`, rounded half up.
///
/// Returns 0 for an empty total instead of dividing by zero.
pub fn percent(part: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let part = part.min(total);
    ((200 * part + total) / (2 * total)) as u8
}

pub fn compute_device_stats(devices: &[Device], tickets: &[Ticket]) -> DeviceStats {
    let total = devices.len();
    let online = devices.iter().filter(|d| d.is_online()).count();
    let compliant = devices.iter().filter(|d| d.is_compliant()).count();
    let open_tickets = tickets.iter().filter(|t| t.is_open()).count();

    DeviceStats {
        total,
        online,
        offline: total - online,
        compliance_rate: percent(compliant, total),
        open_tickets,
    }
}

/// Device count per OS family, in order of first appearance.
pub fn compute_os_distribution(devices: &[Device]) -> Vec<LabelCount> {
    let mut buckets: Vec<LabelCount> = Vec::new();
    for device in devices {
        let label = device.device_type.as_str();
        match buckets.iter_mut().find(|b| b.label == label) {
            Some(bucket) => bucket.count += 1,
            None => buckets.push(LabelCount::new(label, 1)),
        }
    }
    buckets
}

/// Always Compliant, Non-Compliant, Warning in that order, zeros
/// included. Unknown compliance values land in no bucket.
pub fn compute_compliance_distribution(devices: &[Device]) -> [LabelCount; 3] {
    [Compliance::Compliant, Compliance::NonCompliant, Compliance::Warning].map(|c| {
        let count = devices.iter().filter(|d| d.compliance == c).count();
        LabelCount::new(c.as_str(), count)
    })
}

/// Always Active, Pending Setup, Offline, Needs Attention.
pub fn compute_status_distribution(devices: &[Device]) -> [LabelCount; 4] {
    [
        DeviceStatus::Active,
        DeviceStatus::PendingSetup,
        DeviceStatus::Offline,
        DeviceStatus::NeedsAttention,
    ]
    .map(|s| {
        let count = devices.iter().filter(|d| d.status == s).count();
        LabelCount::new(s.as_str(), count)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DeviceType, TicketStatus};
    use crate::store::Inventory;
    use crate::testing::{device, ticket};

    #[test]
    fn sample_fleet_stats() {
        let inv = Inventory::sample().unwrap();
        let stats = compute_device_stats(inv.devices(), inv.tickets());
        assert_eq!(
            stats,
            DeviceStats {
                total: 8,
                online: 6,
                offline: 2,
                compliance_rate: 63,
                open_tickets: 4,
            }
        );
    }

    #[test]
    fn empty_fleet_has_zero_rate() {
        let stats = compute_device_stats(&[], &[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.online + stats.offline, 0);
        assert_eq!(stats.compliance_rate, 0);
        assert_eq!(stats.open_tickets, 0);
    }

    #[test]
    fn online_plus_offline_is_total() {
        let mut devices: Vec<Device> = (0..7).map(|i| device(&format!("D{}", i))).collect();
        devices[1].status = DeviceStatus::Offline;
        devices[3].status = DeviceStatus::PendingSetup;
        devices[5].status = DeviceStatus::from_label("Retired");
        let stats = compute_device_stats(&devices, &[]);
        assert_eq!(stats.online, 4);
        assert_eq!(stats.online + stats.offline, stats.total);
    }

    #[test]
    fn percent_rounds_half_up() {
        assert_eq!(percent(5, 8), 63);
        assert_eq!(percent(1, 8), 13);
        assert_eq!(percent(1, 3), 33);
        assert_eq!(percent(2, 3), 67);
        assert_eq!(percent(0, 5), 0);
        assert_eq!(percent(5, 5), 100);
        assert_eq!(percent(3, 0), 0);
    }

    #[test]
    fn percent_stays_in_range() {
        for total in 0..40 {
            for part in 0..=total {
                assert!(percent(part, total) <= 100);
            }
        }
    }

    #[test]
    fn unknown_ticket_status_is_open() {
        let tickets = vec![
            ticket("T1", TicketStatus::Resolved),
            ticket("T2", TicketStatus::Waiting),
            ticket("T3", TicketStatus::from_label("Escalated")),
        ];
        assert_eq!(compute_device_stats(&[], &tickets).open_tickets, 2);
    }

    #[test]
    fn sample_os_distribution_in_first_seen_order() {
        let inv = Inventory::sample().unwrap();
        assert_eq!(
            compute_os_distribution(inv.devices()),
            vec![
                LabelCount::new("macOS", 3),
                LabelCount::new("Windows", 2),
                LabelCount::new("iOS", 2),
                LabelCount::new("Android", 1),
            ]
        );
    }

    #[test]
    fn os_distribution_buckets_unknown_types_by_label() {
        let mut devices = vec![device("A"), device("B"), device("C")];
        devices[0].device_type = DeviceType::from_label("Linux");
        devices[2].device_type = DeviceType::from_label("Linux");
        let dist = compute_os_distribution(&devices);
        assert_eq!(dist, vec![LabelCount::new("Linux", 2), LabelCount::new("macOS", 1)]);
    }

    #[test]
    fn compliance_distribution_is_fixed_three_buckets() {
        let inv = Inventory::sample().unwrap();
        let dist = compute_compliance_distribution(inv.devices());
        let labels: Vec<&str> = dist.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["Compliant", "Non-Compliant", "Warning"]);
        assert_eq!(dist.iter().map(|b| b.count).collect::<Vec<_>>(), vec![5, 1, 2]);
        assert_eq!(dist.iter().map(|b| b.count).sum::<usize>(), inv.devices().len());
    }

    #[test]
    fn compliance_distribution_keeps_zero_buckets() {
        let dist = compute_compliance_distribution(&[device("A")]);
        assert_eq!(dist[0], LabelCount::new("Compliant", 1));
        assert_eq!(dist[1], LabelCount::new("Non-Compliant", 0));
        assert_eq!(dist[2], LabelCount::new("Warning", 0));

        let empty = compute_compliance_distribution(&[]);
        assert!(empty.iter().all(|b| b.count == 0));
    }

    #[test]
    fn status_distribution_covers_sample() {
        let inv = Inventory::sample().unwrap();
        let dist = compute_status_distribution(inv.devices());
        assert_eq!(dist[0], LabelCount::new("Active", 6));
        assert_eq!(dist[1], LabelCount::new("Pending Setup", 0));
        assert_eq!(dist[2], LabelCount::new("Offline", 1));
        assert_eq!(dist[3], LabelCount::new("Needs Attention", 1));
    }
}
