//! `security`: posture, policies and the non-compliant device list.

use anyhow::Result;

use devicehub_inventory::Tone;

use super::Context;
use crate::render::{badge, bar, glyph, print_json};

pub fn overview(ctx: &Context) -> Result<()> {
    let overview = ctx.service.security_overview();
    if ctx.json() {
        return print_json(&overview);
    }

    let posture = &overview.posture;
    println!(
        "Compliance score {}%  ({} of {} devices compliant)\n",
        posture.compliance_score, posture.compliant, posture.total
    );
    for c in &posture.coverage {
        println!(
            "  {:<16} {:>3}/{:<3} {}",
            c.control.label(),
            c.enabled,
            c.total,
            bar(c.enabled, c.total, 20)
        );
    }

    println!("\nPolicies");
    for p in &overview.policies {
        let tone = if p.enabled { Tone::Success } else { Tone::Muted };
        let state = if p.enabled { "on" } else { "off" };
        println!(
            "  {} {:<28} {:<4} {:<18} {}",
            glyph(tone),
            p.name,
            state,
            p.category,
            p.description
        );
    }

    println!("\nNon-compliant devices");
    if overview.non_compliant.is_empty() {
        println!("  (none)");
    }
    for entry in &overview.non_compliant {
        let d = &entry.device;
        println!("  {:<8} {:<24} {}", d.id, d.name, badge(&d.compliance));
        for issue in &entry.issues {
            println!(
                "      {} [{}] {}",
                glyph(issue.severity.tone()),
                issue.severity.as_str(),
                issue.title
            );
        }
    }
    Ok(())
}
