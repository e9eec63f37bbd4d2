//! Record builders shared by unit tests.

use crate::model::{
    Compliance, Device, DeviceStatus, DeviceType, Ticket, TicketPriority, TicketStatus,
};

/// A compliant, online macOS device with every control enabled.
pub(crate) fn device(id: &str) -> Device {
    Device {
        id: id.into(),
        name: format!("host-{}", id),
        device_type: DeviceType::MacOs,
        model: "MacBook Air M2".into(),
        user: "Test User".into(),
        status: DeviceStatus::Active,
        compliance: Compliance::Compliant,
        last_check_in: "now".into(),
        location: "Berlin, Germany".into(),
        serial_number: format!("SN-{}", id),
        os_version: "macOS 14.2".into(),
        encryption: true,
        firewall: true,
        antivirus: true,
        lat: 0.0,
        lng: 0.0,
    }
}

pub(crate) fn ticket(id: &str, status: TicketStatus) -> Ticket {
    Ticket {
        id: id.into(),
        subject: format!("subject {}", id),
        user: "Test User".into(),
        priority: TicketPriority::Normal,
        status,
        assigned_to: "Unassigned".into(),
        created_date: "2024-01-10 09:30".into(),
        description: String::new(),
    }
}
