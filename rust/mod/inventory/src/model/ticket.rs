use serde::{Deserialize, Serialize};

labeled_enum! {
    pub enum TicketPriority {
        Urgent => "Urgent",
        High => "High",
        Normal => "Normal",
        Low => "Low",
    }
}

labeled_enum! {
    /// Queue state of a ticket. Anything but Resolved is open.
    pub enum TicketStatus {
        New => "New",
        InProgress => "In Progress",
        Waiting => "Waiting",
        Resolved => "Resolved",
    }
}

/// A helpdesk request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: String,
    pub subject: String,

    /// Reporting user's display name.
    pub user: String,

    pub priority: TicketPriority,
    pub status: TicketStatus,

    /// Team or person handling the ticket ("Unassigned" when nobody).
    pub assigned_to: String,

    /// Free-text creation time ("2024-01-10 09:30").
    pub created_date: String,

    #[serde(default)]
    pub description: String,
}

impl Ticket {
    pub fn is_open(&self) -> bool {
        self.status != TicketStatus::Resolved
    }
}
