//! Joint-probability expansion of every continuation below a trie level.

use foresight_core::models::{ActionPath, DecisionNode, EventLabel, Probability};
use indexmap::IndexMap;

/// Expand the Cartesian set of chains from `level` down to every leaf.
///
/// A node with no children terminates a path: the recursion base is an
/// empty chain with probability 1, constructed fresh for every call so no
/// value is ever shared between expansions. An internal node contributes
/// its conditional probability (count over the sum of sibling counts) to
/// every path running through it.
pub(crate) fn expand(level: &IndexMap<EventLabel, DecisionNode>) -> Vec<ActionPath> {
    if level.is_empty() {
        return vec![ActionPath::terminal()];
    }

    let sum: u64 = level.values().map(|node| node.count).sum();
    let mut paths = Vec::new();
    for node in level.values() {
        let conditional = Probability::conditional(node.count, sum);
        for tail in expand(&node.children) {
            paths.push(tail.prefixed(&node.action, conditional));
        }
    }
    paths
}
