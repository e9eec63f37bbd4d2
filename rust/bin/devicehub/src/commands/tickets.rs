//! `tickets` and `ticket <id>`.

use anyhow::Result;
use serde::Serialize;

use devicehub_inventory::model::Ticket;
use devicehub_inventory::service::ticket::TicketSummary;
use devicehub_inventory::service::{Selector, TicketQuery};

use super::Context;
use crate::render::{badge, clip, print_json};

#[derive(Serialize)]
struct TicketList {
    summary: TicketSummary,
    tickets: Vec<Ticket>,
}

fn ticket_list(ctx: &Context, status: &str, priority: &str, open_only: bool) -> TicketList {
    let query = TicketQuery {
        status: Selector::parse(status),
        priority: Selector::parse(priority),
        open_only,
    };
    TicketList {
        summary: ctx.service.ticket_summary(),
        tickets: ctx.service.list_tickets(&query),
    }
}

pub fn list(ctx: &Context, status: &str, priority: &str, open_only: bool) -> Result<()> {
    let list = ticket_list(ctx, status, priority, open_only);
    if ctx.json() {
        return print_json(&list);
    }
    let TicketList { summary, tickets } = list;

    let counts: Vec<String> = summary
        .by_status
        .iter()
        .map(|b| format!("{} {}", b.label, b.count))
        .collect();
    println!(
        "{} ticket(s), {} open  [{}]\n",
        summary.total,
        summary.open,
        counts.join(", ")
    );

    if tickets.is_empty() {
        println!("No tickets match.");
        return Ok(());
    }

    println!(
        "{:<8} {:<36} {:<16} {:<10} {:<15} {:<16}",
        "ID", "SUBJECT", "USER", "PRIORITY", "STATUS", "ASSIGNED"
    );
    for t in &tickets {
        println!(
            "{:<8} {:<36} {:<16} {:<10} {:<15} {:<16}",
            t.id,
            clip(&t.subject, 36),
            clip(&t.user, 16),
            badge(&t.priority),
            badge(&t.status),
            clip(&t.assigned_to, 16),
        );
    }
    Ok(())
}

pub fn show(ctx: &Context, id: &str) -> Result<()> {
    let t = ctx.service.get_ticket(id)?;
    if ctx.json() {
        return print_json(&t);
    }

    println!("{}: {}", t.id, t.subject);
    println!("  {:<10} {}", "User", t.user);
    println!("  {:<10} {}", "Priority", badge(&t.priority));
    println!("  {:<10} {}", "Status", badge(&t.status));
    println!("  {:<10} {}", "Assigned", t.assigned_to);
    println!("  {:<10} {}", "Created", t.created_date);
    if !t.description.is_empty() {
        println!("\n{}", t.description);
    }
    Ok(())
}
