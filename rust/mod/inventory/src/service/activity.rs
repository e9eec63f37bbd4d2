use crate::model::ActivityEvent;

use super::InventoryService;

impl InventoryService {
    /// The first `limit` events of the feed. The fixture is newest
    /// first, so this is the most recent activity.
    pub fn recent_activity(&self, limit: usize) -> Vec<ActivityEvent> {
        self.inventory
            .activities()
            .iter()
            .take(limit)
            .cloned()
            .collect()
    }

    /// Events whose device name matches exactly.
    pub fn activity_for_device(&self, device_name: &str) -> Vec<ActivityEvent> {
        self.inventory
            .activities()
            .iter()
            .filter(|a| a.device == device_name)
            .cloned()
            .collect()
    }
}
