//! Frequency-threshold feature search with iterative relaxation.

use foresight_core::config::SelectionConfig;
use foresight_core::constants::{PERCENTAGE_FLOOR, PERCENTAGE_RESET};
use foresight_core::errors::SelectionError;
use foresight_core::models::{EventLabel, FeatureReport, RankedFeature, Sequence};
use indexmap::{IndexMap, IndexSet};
use tracing::{debug, info};

/// Outcome of a converged feature search.
#[derive(Debug, Clone)]
pub struct FeatureSelection {
    /// The selected labels, in first-observation order.
    pub features: IndexSet<EventLabel>,
    /// Informational report: ranking, convergence percentage, rounds.
    pub report: FeatureReport,
}

impl FeatureSelection {
    pub fn contains(&self, label: &str) -> bool {
        self.features.contains(label)
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

/// Adaptive selector deciding which labels are signal and which are noise.
///
/// Membership is judged against global occurrence counts: a label is kept
/// at percentage `p` iff its count across the whole corpus reaches
/// `floor(num_sequences * p / 100)`.
#[derive(Debug, Clone)]
pub struct FeatureSelector {
    config: SelectionConfig,
}

impl FeatureSelector {
    pub fn new(config: SelectionConfig) -> Self {
        Self { config }
    }

    /// Search for a feature set of the configured size.
    ///
    /// Relaxation, one round per step: while the set is too small the
    /// percentage drops by one point; at the floor the feature target is
    /// lowered by one and the percentage resets to 100. The search fails
    /// with [`SelectionError::NonConvergent`] once the round cap is hit or
    /// the target is exhausted — it never silently returns an empty set.
    pub fn select(&self, sequences: &[Sequence]) -> Result<FeatureSelection, SelectionError> {
        if sequences.is_empty() {
            return Err(SelectionError::EmptyCorpus);
        }

        let occurrences = global_occurrences(sequences);
        let num_sequences = sequences.len() as u64;

        let mut target = self.config.expected_features;
        let mut percentage = self.config.start_percentage.clamp(PERCENTAGE_FLOOR, 100);
        let mut rounds = 0u32;

        loop {
            rounds += 1;
            if rounds > self.config.max_rounds {
                return Err(SelectionError::NonConvergent {
                    rounds: self.config.max_rounds,
                    target_features: target,
                    floor: PERCENTAGE_FLOOR,
                });
            }

            let threshold = num_sequences * u64::from(percentage) / 100;
            let selected: IndexSet<EventLabel> = occurrences
                .iter()
                .filter(|(_, &count)| count >= threshold)
                .map(|(label, _)| label.clone())
                .collect();

            if selected.len() >= target {
                info!(
                    features = selected.len(),
                    percentage, rounds, "feature search converged"
                );
                let report = build_report(&selected, &occurrences, percentage, target, rounds);
                return Ok(FeatureSelection {
                    features: selected,
                    report,
                });
            }

            if percentage > PERCENTAGE_FLOOR {
                percentage -= 1;
            } else if target > 1 {
                debug!(target, "threshold floor reached, lowering feature target");
                target -= 1;
                percentage = PERCENTAGE_RESET;
            } else {
                return Err(SelectionError::NonConvergent {
                    rounds,
                    target_features: target,
                    floor: PERCENTAGE_FLOOR,
                });
            }
        }
    }
}

/// Count every label across the whole corpus.
///
/// Multiset semantics: a label occurring twice in one sequence counts
/// twice. Insertion order of the map is first observation.
fn global_occurrences(sequences: &[Sequence]) -> IndexMap<EventLabel, u64> {
    let mut counts: IndexMap<EventLabel, u64> = IndexMap::new();
    for sequence in sequences {
        for label in sequence {
            *counts.entry(label.clone()).or_insert(0) += 1;
        }
    }
    counts
}

fn build_report(
    selected: &IndexSet<EventLabel>,
    occurrences: &IndexMap<EventLabel, u64>,
    converged_percentage: u32,
    target_features: usize,
    rounds: u32,
) -> FeatureReport {
    let mut ranked: Vec<(EventLabel, u64)> = selected
        .iter()
        .map(|label| (label.clone(), occurrences[label]))
        .collect();
    // Stable sort keeps first-observation order among equal counts.
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    FeatureReport {
        features: ranked
            .into_iter()
            .enumerate()
            .map(|(index, (label, occurrences))| RankedFeature {
                rank: index + 1,
                label,
                occurrences,
            })
            .collect(),
        converged_percentage,
        target_features,
        rounds,
    }
}
