use serde::Serialize;

use devicehub_core::ServiceError;

use crate::model::{Ticket, TicketStatus};

use super::filter::{TicketQuery, filter_tickets};
use super::stats::LabelCount;
use super::InventoryService;

/// Queue summary for the tickets view.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketSummary {
    pub total: usize,
    pub open: usize,
    /// New, In Progress, Waiting, Resolved, zeros included.
    pub by_status: Vec<LabelCount>,
}

pub fn compute_ticket_summary(tickets: &[Ticket]) -> TicketSummary {
    let by_status = TicketStatus::KNOWN
        .iter()
        .map(|s| {
            let count = tickets.iter().filter(|t| &t.status == s).count();
            LabelCount::new(s.as_str(), count)
        })
        .collect();

    TicketSummary {
        total: tickets.len(),
        open: tickets.iter().filter(|t| t.is_open()).count(),
        by_status,
    }
}

impl InventoryService {
    pub fn get_ticket(&self, id: &str) -> Result<Ticket, ServiceError> {
        self.inventory
            .ticket(id)
            .cloned()
            .ok_or_else(|| ServiceError::NotFound(format!("ticket '{}' not found", id)))
    }

    pub fn list_tickets(&self, query: &TicketQuery) -> Vec<Ticket> {
        filter_tickets(self.inventory.tickets(), query)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn ticket_summary(&self) -> TicketSummary {
        compute_ticket_summary(self.inventory.tickets())
    }
}
