//! Script catalogue and execution history. Scripts are shown, never run.

use anyhow::Result;
use serde::Serialize;

use devicehub_inventory::model::{ExecutionRecord, Script};
use devicehub_inventory::service::Selector;

use super::Context;
use crate::render::{badge, clip, print_json};

pub fn list(ctx: &Context, platform: &str) -> Result<()> {
    let scripts = ctx.service.list_scripts(&Selector::parse(platform));
    if ctx.json() {
        return print_json(&scripts);
    }

    if scripts.is_empty() {
        println!("No scripts match.");
        return Ok(());
    }

    println!(
        "{:<8} {:<28} {:<11} {:<14} {:<14}",
        "ID", "NAME", "PLATFORM", "LANGUAGE", "MODIFIED"
    );
    for s in &scripts {
        println!(
            "{:<8} {:<28} {:<11} {:<14} {:<14}",
            s.id,
            clip(&s.name, 28),
            badge(&s.platform),
            badge(&s.language),
            s.last_modified,
        );
    }
    Ok(())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ScriptDetail {
    #[serde(flatten)]
    script: Script,
    executions: Vec<ExecutionRecord>,
}

/// A script with its past runs. The body is dropped unless `with_code`.
fn script_detail(ctx: &Context, id: &str, with_code: bool) -> Result<ScriptDetail> {
    let mut script = ctx.service.get_script(id)?;
    let executions = ctx.service.executions_of(&script);
    if !with_code {
        script.code.clear();
    }
    Ok(ScriptDetail { script, executions })
}

pub fn show(ctx: &Context, id: &str, with_code: bool) -> Result<()> {
    let detail = script_detail(ctx, id, with_code)?;
    if ctx.json() {
        return print_json(&detail);
    }

    let ScriptDetail { script, executions } = detail;

    println!("{}: {}", script.id, script.name);
    println!("  {:<10} {}", "Platform", badge(&script.platform));
    println!("  {:<10} {}", "Language", badge(&script.language));
    println!("  {:<10} {}", "Modified", script.last_modified);
    println!("\n{}", script.description);

    if !executions.is_empty() {
        println!("\nRuns");
        print_executions(&executions);
    }

    if with_code {
        println!("\n{}", script.code.trim_end());
    }
    Ok(())
}

pub fn executions(ctx: &Context) -> Result<()> {
    let history = ctx.service.execution_history();
    if ctx.json() {
        return print_json(&history);
    }
    if history.is_empty() {
        println!("No executions recorded.");
        return Ok(());
    }
    print_executions(&history);
    Ok(())
}

fn print_executions(records: &[ExecutionRecord]) {
    println!(
        "  {:<8} {:<28} {:<22} {:<16} {:<18} {:<10}",
        "ID", "SCRIPT", "TARGETS", "BY", "WHEN", "RESULT"
    );
    for r in records {
        println!(
            "  {:<8} {:<28} {:<22} {:<16} {:<18} {:<10}",
            r.id,
            clip(&r.script_name, 28),
            clip(&r.target_devices, 22),
            clip(&r.executed_by, 16),
            clip(&r.timestamp, 18),
            badge(&r.result),
        );
    }
}
