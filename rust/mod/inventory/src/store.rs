use std::collections::HashSet;

use devicehub_core::{FixtureLocation, ServiceConfig, ServiceError};
use devicehub_fixture::{FileLoader, FixtureError, FixtureSource, load_collection};
use tracing::{debug, info};

use crate::model::{ActivityEvent, Device, ExecutionRecord, Script, SecurityPolicy, Ticket};
use crate::sample;

pub const DEVICES: &str = "devices";
pub const TICKETS: &str = "tickets";
pub const ACTIVITIES: &str = "activities";
pub const SCRIPTS: &str = "scripts";
pub const POLICIES: &str = "policies";
pub const EXECUTIONS: &str = "executions";

/// Raw collections used to build an [`Inventory`].
#[derive(Debug, Clone, Default)]
pub struct InventoryParts {
    pub devices: Vec<Device>,
    pub tickets: Vec<Ticket>,
    pub activities: Vec<ActivityEvent>,
    pub scripts: Vec<Script>,
    pub policies: Vec<SecurityPolicy>,
    pub executions: Vec<ExecutionRecord>,
}

/// The immutable fixture store.
///
/// Built once, then shared read-only (usually behind an `Arc`). There
/// is no mutating API; identities are unique within each collection.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    devices: Vec<Device>,
    tickets: Vec<Ticket>,
    activities: Vec<ActivityEvent>,
    scripts: Vec<Script>,
    policies: Vec<SecurityPolicy>,
    executions: Vec<ExecutionRecord>,
}

impl Inventory {
    /// Build a store, rejecting duplicate identities.
    pub fn new(parts: InventoryParts) -> Result<Self, ServiceError> {
        ensure_unique(DEVICES, parts.devices.iter().map(|d| d.id.as_str()))?;
        ensure_unique(TICKETS, parts.tickets.iter().map(|t| t.id.as_str()))?;
        ensure_unique(ACTIVITIES, parts.activities.iter().map(|a| a.id.as_str()))?;
        ensure_unique(SCRIPTS, parts.scripts.iter().map(|s| s.id.as_str()))?;
        ensure_unique(POLICIES, parts.policies.iter().map(|p| p.name.as_str()))?;
        ensure_unique(EXECUTIONS, parts.executions.iter().map(|e| e.id.as_str()))?;

        Ok(Self {
            devices: parts.devices,
            tickets: parts.tickets,
            activities: parts.activities,
            scripts: parts.scripts,
            policies: parts.policies,
            executions: parts.executions,
        })
    }

    /// Decode every known collection from a fixture source. Collections
    /// the source lacks are empty.
    pub fn from_source(source: &dyn FixtureSource) -> Result<Self, ServiceError> {
        for name in source.collections() {
            if ![DEVICES, TICKETS, ACTIVITIES, SCRIPTS, POLICIES, EXECUTIONS].contains(&name) {
                debug!("Inventory: ignoring unknown collection {:?}", name);
            }
        }

        let parts = InventoryParts {
            devices: load_collection(source, DEVICES).map_err(fixture_error)?,
            tickets: load_collection(source, TICKETS).map_err(fixture_error)?,
            activities: load_collection(source, ACTIVITIES).map_err(fixture_error)?,
            scripts: load_collection(source, SCRIPTS).map_err(fixture_error)?,
            policies: load_collection(source, POLICIES).map_err(fixture_error)?,
            executions: load_collection(source, EXECUTIONS).map_err(fixture_error)?,
        };
        let inventory = Self::new(parts)?;

        info!(
            "Inventory loaded from {}: {} devices, {} tickets, {} activities, {} scripts",
            source.describe(),
            inventory.devices.len(),
            inventory.tickets.len(),
            inventory.activities.len(),
            inventory.scripts.len(),
        );
        Ok(inventory)
    }

    /// The built-in sample fleet.
    pub fn sample() -> Result<Self, ServiceError> {
        Self::from_source(&sample::source())
    }

    /// Load from wherever the config points: a data directory, or the
    /// built-in sample.
    pub fn load(config: &ServiceConfig) -> Result<Self, ServiceError> {
        match config.fixture_location() {
            FixtureLocation::Builtin => Self::sample(),
            FixtureLocation::Directory(dir) => {
                let source = FileLoader::load(&dir).map_err(fixture_error)?;
                Self::from_source(&source)
            }
        }
    }

    pub fn devices(&self) -> &[Device] {
        &self.devices
    }

    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    /// Activity feed, in fixture order (newest first).
    pub fn activities(&self) -> &[ActivityEvent] {
        &self.activities
    }

    pub fn scripts(&self) -> &[Script] {
        &self.scripts
    }

    pub fn policies(&self) -> &[SecurityPolicy] {
        &self.policies
    }

    pub fn executions(&self) -> &[ExecutionRecord] {
        &self.executions
    }

    pub fn device(&self, id: &str) -> Option<&Device> {
        self.devices.iter().find(|d| d.id == id)
    }

    pub fn ticket(&self, id: &str) -> Option<&Ticket> {
        self.tickets.iter().find(|t| t.id == id)
    }

    pub fn script(&self, id: &str) -> Option<&Script> {
        self.scripts.iter().find(|s| s.id == id)
    }
}

fn ensure_unique<'a>(
    collection: &str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), ServiceError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(ServiceError::Validation(format!(
                "duplicate id '{}' in {}",
                id, collection
            )));
        }
    }
    Ok(())
}

fn fixture_error(e: FixtureError) -> ServiceError {
    ServiceError::Storage(e.to_string())
}
