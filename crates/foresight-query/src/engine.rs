//! QueryEngine — prefix descent, distributions, ranked path enumeration.

use foresight_core::errors::QueryError;
use foresight_core::models::{ActionPath, DecisionNode, DecisionTrie, EventLabel, Probability};
use indexmap::IndexMap;
use tracing::debug;

use crate::paths;

/// Read-only query surface over a build-once trie.
pub struct QueryEngine {
    trie: DecisionTrie,
}

impl QueryEngine {
    pub fn new(trie: DecisionTrie) -> Self {
        Self { trie }
    }

    /// The underlying trie.
    pub fn trie(&self) -> &DecisionTrie {
        &self.trie
    }

    /// Descend to the children level reached by following `prefix` exactly,
    /// one label per trie depth.
    ///
    /// The first label absent at its expected position fails with
    /// [`QueryError::PrefixNotFound`] naming the offending hop — the
    /// historical corpus never observed that continuation. This is a
    /// different condition from reaching a node with no children.
    fn descend(
        &self,
        prefix: &[EventLabel],
    ) -> Result<&IndexMap<EventLabel, DecisionNode>, QueryError> {
        let mut level = &self.trie.roots;
        for (position, label) in prefix.iter().enumerate() {
            let node = level.get(label).ok_or_else(|| QueryError::PrefixNotFound {
                position,
                label: label.clone(),
            })?;
            level = &node.children;
        }
        Ok(level)
    }

    /// Probability of each possible next step after `prefix`.
    ///
    /// An empty prefix reads the forest's top level. Each child of the
    /// reached level is weighted by its count over the sum of sibling
    /// counts, so the emitted probabilities sum to 1. A level with zero
    /// children yields [`QueryError::NoContinuation`] rather than a
    /// distribution with an undefined denominator.
    pub fn next_step_probabilities(
        &self,
        prefix: &[EventLabel],
    ) -> Result<IndexMap<EventLabel, Probability>, QueryError> {
        let level = self.descend(prefix)?;
        if level.is_empty() {
            return Err(QueryError::NoContinuation);
        }

        let sum: u64 = level.values().map(|node| node.count).sum();
        Ok(level
            .iter()
            .map(|(label, node)| (label.clone(), Probability::conditional(node.count, sum)))
            .collect())
    }

    /// Every complete continuation below `prefix`, ranked by joint
    /// probability descending.
    ///
    /// The result is the Cartesian expansion of all root-to-leaf chains
    /// under the reached level; each hop contributes its conditional
    /// probability multiplicatively. The sort is stable, so equal
    /// probabilities keep first-observation order.
    pub fn enumerate_paths(&self, prefix: &[EventLabel]) -> Result<Vec<ActionPath>, QueryError> {
        let level = self.descend(prefix)?;
        if level.is_empty() {
            return Err(QueryError::NoContinuation);
        }

        let mut enumerated = paths::expand(level);
        enumerated.sort_by(|a, b| b.probability.value().total_cmp(&a.probability.value()));
        debug!(
            prefix_len = prefix.len(),
            paths = enumerated.len(),
            "paths enumerated"
        );
        Ok(enumerated)
    }
}
