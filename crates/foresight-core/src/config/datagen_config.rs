use serde::{Deserialize, Serialize};

use super::defaults;

/// Synthetic log generation configuration.
///
/// When `max_between` is unset, the per-gap noise budget is derived from
/// `max_between_fraction` of the noise pool size.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatagenConfig {
    /// Number of traces to generate.
    pub amount: usize,
    /// Absolute cap on noise entries mixed between two actions.
    pub max_between: Option<usize>,
    /// Per-gap noise budget as a fraction of the noise pool, used when
    /// `max_between` is unset.
    pub max_between_fraction: f64,
    /// Probability (percent) that noise follows an action.
    pub mix_probability: f64,
    /// Fixed RNG seed; entropy-seeded when unset.
    pub seed: Option<u64>,
}

impl Default for DatagenConfig {
    fn default() -> Self {
        Self {
            amount: defaults::DEFAULT_GENERATED_TRACES,
            max_between: None,
            max_between_fraction: defaults::DEFAULT_MAX_BETWEEN_FRACTION,
            mix_probability: defaults::DEFAULT_MIX_PROBABILITY,
            seed: None,
        }
    }
}
