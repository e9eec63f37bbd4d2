//! Landing view: metric cards, distributions, activity feed.

use anyhow::Result;

use devicehub_inventory::model::ActivityEvent;
use devicehub_inventory::service::{DeviceStats, LabelCount};

use super::Context;
use crate::render::{bar, clip, print_json};

const BAR_WIDTH: usize = 24;

pub fn dashboard(ctx: &Context, activity_limit: usize) -> Result<()> {
    let dash = ctx.service.dashboard(activity_limit);
    if ctx.json() {
        return print_json(&dash);
    }

    print_stats(&dash.stats);
    println!();
    println!("Devices by OS");
    print_distribution(&dash.os_distribution);
    println!();
    println!("Compliance");
    print_distribution(&dash.compliance_distribution);
    println!();
    println!("Devices by status");
    print_distribution(&dash.status_distribution);
    println!();
    println!("Recent activity");
    print_activity(&dash.recent_activity);
    Ok(())
}

pub fn stats(ctx: &Context) -> Result<()> {
    let stats = ctx.service.device_stats();
    if ctx.json() {
        return print_json(&stats);
    }
    print_stats(&stats);
    Ok(())
}

pub fn os(ctx: &Context) -> Result<()> {
    let dist = ctx.service.os_distribution();
    if ctx.json() {
        return print_json(&dist);
    }
    print_distribution(&dist);
    Ok(())
}

pub fn compliance(ctx: &Context) -> Result<()> {
    let dist = ctx.service.compliance_distribution();
    if ctx.json() {
        return print_json(&dist);
    }
    print_distribution(&dist);
    Ok(())
}

pub fn activity(ctx: &Context, limit: usize) -> Result<()> {
    let events = ctx.service.recent_activity(limit);
    if ctx.json() {
        return print_json(&events);
    }
    print_activity(&events);
    Ok(())
}

fn print_stats(stats: &DeviceStats) {
    println!("{:<18} {}", "Total devices", stats.total);
    println!("{:<18} {}", "Online", stats.online);
    println!("{:<18} {}", "Offline", stats.offline);
    println!("{:<18} {}%", "Compliance rate", stats.compliance_rate);
    println!("{:<18} {}", "Open tickets", stats.open_tickets);
}

fn print_distribution(buckets: &[LabelCount]) {
    let max = buckets.iter().map(|b| b.count).max().unwrap_or(0);
    for b in buckets {
        println!(
            "  {:<16} {:>4}  {}",
            b.label,
            b.count,
            bar(b.count, max, BAR_WIDTH)
        );
    }
}

pub(crate) fn print_activity(events: &[ActivityEvent]) {
    if events.is_empty() {
        println!("  (no activity)");
        return;
    }
    for e in events {
        println!(
            "  {:<14} {:<11} {:<24} {}",
            clip(&e.timestamp, 14),
            e.kind,
            clip(&e.device, 24),
            e.description
        );
    }
}
