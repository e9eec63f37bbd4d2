//! `devices` and `device <id>`.

use anyhow::Result;

use devicehub_core::ListParams;
use devicehub_inventory::Tone;
use devicehub_inventory::service::{DeviceQuery, SecurityControl};

use super::Context;
use super::dashboard::print_activity;
use crate::render::{badge, clip, glyph, print_json};

pub fn list(
    ctx: &Context,
    query: &str,
    status: &str,
    os: &str,
    limit: Option<usize>,
    offset: Option<usize>,
) -> Result<()> {
    let query = DeviceQuery::from_labels(query, status, os);
    let params = ListParams::new(limit.or(ctx.page_size), offset);
    let result = ctx.service.list_devices(&query, &params);

    if ctx.json() {
        return print_json(&result);
    }

    if result.items.is_empty() {
        println!("No devices match.");
        return Ok(());
    }

    println!(
        "{:<8} {:<24} {:<9} {:<18} {:<18} {:<16} {:<14}",
        "ID", "NAME", "OS", "USER", "STATUS", "COMPLIANCE", "CHECK-IN"
    );
    for d in &result.items {
        println!(
            "{:<8} {:<24} {:<9} {:<18} {:<18} {:<16} {:<14}",
            d.id,
            clip(&d.name, 24),
            d.device_type,
            clip(&d.user, 18),
            badge(&d.status),
            badge(&d.compliance),
            clip(&d.last_check_in, 14),
        );
    }
    println!(
        "\n{} of {} device(s) (offset {})",
        result.items.len(),
        result.total,
        params.offset
    );
    Ok(())
}

pub fn show(ctx: &Context, id: &str) -> Result<()> {
    let detail = ctx.service.device_detail(id)?;
    if ctx.json() {
        return print_json(&detail);
    }

    let d = &detail.device;
    println!("{} ({})", d.name, d.id);
    println!("  {:<14} {}", "Type", d.device_type);
    println!("  {:<14} {}", "Model", d.model);
    println!("  {:<14} {}", "OS version", d.os_version);
    println!("  {:<14} {}", "Serial", d.serial_number);
    println!("  {:<14} {}", "User", d.user);
    println!("  {:<14} {}", "Location", d.location);
    println!("  {:<14} {}", "Status", badge(&d.status));
    println!("  {:<14} {}", "Compliance", badge(&d.compliance));
    println!("  {:<14} {}", "Last check-in", d.last_check_in);

    println!("\nSecurity");
    for control in SecurityControl::ALL {
        let enabled = control.is_enabled(d);
        let mark = glyph(if enabled { Tone::Success } else { Tone::Danger });
        println!(
            "  {} {:<16} {}",
            mark,
            control.label(),
            control.state_label(enabled)
        );
    }

    if !detail.issues.is_empty() {
        println!("\nIssues");
        for issue in &detail.issues {
            println!(
                "  {} [{}] {}: {}",
                glyph(issue.severity.tone()),
                issue.severity.as_str(),
                issue.title,
                issue.remedy
            );
        }
    }

    println!("\nActivity");
    print_activity(&detail.activity);
    Ok(())
}
