use serde::{Deserialize, Serialize};

/// Parameters for list operations.
#[derive(Debug, Clone, Deserialize)]
pub struct ListParams {
    /// Maximum number of results to return.
    #[serde(default = "default_limit")]
    pub limit: usize,

    /// Offset for pagination.
    #[serde(default)]
    pub offset: usize,
}

fn default_limit() -> usize {
    50
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            limit: default_limit(),
            offset: 0,
        }
    }
}

impl ListParams {
    /// Build params from optional CLI values, falling back to defaults.
    pub fn new(limit: Option<usize>, offset: Option<usize>) -> Self {
        Self {
            limit: limit.unwrap_or_else(default_limit),
            offset: offset.unwrap_or(0),
        }
    }
}

/// Result wrapper for list operations.
///
/// `total` counts every matching item, not just the returned page.
#[derive(Debug, Clone, Serialize)]
pub struct ListResult<T: Serialize> {
    pub items: Vec<T>,
    pub total: usize,
}

impl<T: Serialize> ListResult<T> {
    /// Slice one page out of a full, already-filtered result set.
    pub fn paginate(all: Vec<T>, params: &ListParams) -> Self {
        let total = all.len();
        let items = all
            .into_iter()
            .skip(params.offset)
            .take(params.limit)
            .collect();
        Self { items, total }
    }
}
