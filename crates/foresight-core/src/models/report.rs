use serde::{Deserialize, Serialize};

use super::EventLabel;

/// One selected feature with its place in the report ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedFeature {
    /// 1-based rank, by global occurrence count descending.
    pub rank: usize,
    pub label: EventLabel,
    /// Global occurrence count across the whole corpus.
    pub occurrences: u64,
}

/// Informational summary of a converged feature search.
///
/// Downstream correctness does not depend on this; it exists for operator
/// reporting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureReport {
    /// Selected features, ranked by occurrence count descending
    /// (ties keep first-observation order).
    pub features: Vec<RankedFeature>,
    /// Percentage at which the search converged.
    pub converged_percentage: u32,
    /// Feature target in force at convergence.
    pub target_features: usize,
    /// Search rounds consumed.
    pub rounds: u32,
}
