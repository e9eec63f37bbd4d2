//! Client-side filtering over fixture collections.
//!
//! Filters never reorder: results come back in collection order.

use crate::model::{
    Device, DeviceStatus, DeviceType, Script, ScriptPlatform, Ticket, TicketPriority,
    TicketStatus,
};

/// Sentinel label that disables a filter dimension.
pub const ALL: &str = "all";

/// One filter dimension: either everything, or exactly one value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selector<T> {
    #[default]
    All,
    Only(T),
}

impl<T: PartialEq> Selector<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == value,
        }
    }
}

impl<T: From<String>> Selector<T> {
    /// Parse a filter value; the sentinel `"all"` disables the filter.
    /// Any other text is an exact match on the label, so an unknown
    /// label only matches records carrying that same unknown label.
    pub fn parse(s: &str) -> Self {
        if s == ALL {
            Self::All
        } else {
            Self::Only(T::from(s.to_string()))
        }
    }
}

/// Filter criteria for the device inventory table.
#[derive(Debug, Clone, Default)]
pub struct DeviceQuery {
    /// Case-insensitive substring matched against name, user and
    /// location. Empty matches everything.
    pub text: String,
    pub status: Selector<DeviceStatus>,
    pub os: Selector<DeviceType>,
}

impl DeviceQuery {
    /// Build a query from raw labels, the way a UI hands them over.
    pub fn from_labels(text: &str, status: &str, os: &str) -> Self {
        Self {
            text: text.to_string(),
            status: Selector::parse(status),
            os: Selector::parse(os),
        }
    }

    pub fn matches(&self, device: &Device) -> bool {
        self.matches_text(device)
            && self.status.matches(&device.status)
            && self.os.matches(&device.device_type)
    }

    fn matches_text(&self, device: &Device) -> bool {
        if self.text.is_empty() {
            return true;
        }
        let needle = self.text.to_lowercase();
        [&device.name, &device.user, &device.location]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

pub fn filter_devices<'a>(devices: &'a [Device], query: &DeviceQuery) -> Vec<&'a Device> {
    devices.iter().filter(|d| query.matches(d)).collect()
}

/// Filter criteria for the ticket queue.
#[derive(Debug, Clone, Default)]
pub struct TicketQuery {
    pub status: Selector<TicketStatus>,
    pub priority: Selector<TicketPriority>,
    /// Drop Resolved tickets.
    pub open_only: bool,
}

impl TicketQuery {
    pub fn matches(&self, ticket: &Ticket) -> bool {
        (!self.open_only || ticket.is_open())
            && self.status.matches(&ticket.status)
            && self.priority.matches(&ticket.priority)
    }
}

pub fn filter_tickets<'a>(tickets: &'a [Ticket], query: &TicketQuery) -> Vec<&'a Ticket> {
    tickets.iter().filter(|t| query.matches(t)).collect()
}

/// Scripts usable on a platform. Selecting Windows or macOS includes
/// scripts that target Both.
pub fn filter_scripts<'a>(
    scripts: &'a [Script],
    platform: &Selector<ScriptPlatform>,
) -> Vec<&'a Script> {
    scripts
        .iter()
        .filter(|s| match platform {
            Selector::All => true,
            Selector::Only(p) => s.runs_on(p),
        })
        .collect()
}
