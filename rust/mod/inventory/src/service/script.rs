use devicehub_core::ServiceError;

use crate::model::{ExecutionRecord, Script, ScriptPlatform};

use super::filter::{Selector, filter_scripts};
use super::InventoryService;

impl InventoryService {
    pub fn list_scripts(&self, platform: &Selector<ScriptPlatform>) -> Vec<Script> {
        filter_scripts(self.inventory.scripts(), platform)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn get_script(&self, id: &str) -> Result<Script, ServiceError> {
        self.inventory
            .script(id)
            .cloned()
            .ok_or_else(|| ServiceError::NotFound(format!("script '{}' not found", id)))
    }

    /// Past runs of a script, matched by script name.
    pub fn executions_of(&self, script: &Script) -> Vec<ExecutionRecord> {
        self.inventory
            .executions()
            .iter()
            .filter(|e| e.script_name == script.name)
            .cloned()
            .collect()
    }

    /// The whole execution log, in fixture order.
    pub fn execution_history(&self) -> Vec<ExecutionRecord> {
        self.inventory.executions().to_vec()
    }
}
