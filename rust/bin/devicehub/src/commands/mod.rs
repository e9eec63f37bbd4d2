//! Subcommand implementations. Each reads from the inventory service and
//! prints either a table or pretty JSON.

pub mod config;
pub mod dashboard;
pub mod devices;
pub mod scripts;
pub mod security;
pub mod tickets;

use devicehub_inventory::InventoryService;

use crate::render::OutputFormat;

/// Everything a fixture-backed command needs.
pub struct Context {
    pub service: InventoryService,
    pub output: OutputFormat,
    /// Default `--limit` for paged lists.
    pub page_size: Option<usize>,
}

impl Context {
    pub fn json(&self) -> bool {
        self.output == OutputFormat::Json
    }
}

#[cfg(test)]
pub(crate) fn sample_context(output: OutputFormat) -> Context {
    use std::sync::Arc;

    use devicehub_inventory::Inventory;

    Context {
        service: InventoryService::new(Arc::new(Inventory::sample().unwrap())),
        output,
        page_size: None,
    }
}
