//! Order-preserving projection of raw sequences onto a feature set.

use foresight_core::models::{EventLabel, Sequence};
use indexmap::IndexSet;

/// Keep only selected labels in each sequence, preserving relative order.
///
/// Sequences that project to empty are dropped entirely. Pure: the input
/// corpus is left untouched.
pub fn project(sequences: &[Sequence], features: &IndexSet<EventLabel>) -> Vec<Sequence> {
    sequences
        .iter()
        .filter_map(|sequence| {
            let projected: Sequence = sequence
                .iter()
                .filter(|label| features.contains(label.as_str()))
                .cloned()
                .collect();
            (!projected.is_empty()).then_some(projected)
        })
        .collect()
}
