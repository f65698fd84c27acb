use serde::{Deserialize, Serialize};

use super::defaults;

/// Feature-search configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    /// How many relevant features the search aims to find.
    pub expected_features: usize,
    /// Starting relevance threshold, as a percentage of the corpus size.
    /// Valid range is (2, 100].
    pub start_percentage: u32,
    /// Upper bound on search rounds before giving up.
    pub max_rounds: u32,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            expected_features: defaults::DEFAULT_EXPECTED_FEATURES,
            start_percentage: defaults::DEFAULT_START_PERCENTAGE,
            max_rounds: defaults::DEFAULT_MAX_ROUNDS,
        }
    }
}
