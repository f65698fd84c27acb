use serde::{Deserialize, Serialize};

use crate::models::EventLabel;

use super::defaults;

/// Query configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    /// Actions already completed, used as the query prefix. May be empty,
    /// in which case queries read the forest's top level.
    pub completed_actions: Vec<EventLabel>,
    /// Maximum number of ranked paths included in reports.
    pub max_paths: usize,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            completed_actions: Vec::new(),
            max_paths: defaults::DEFAULT_MAX_PATHS,
        }
    }
}
