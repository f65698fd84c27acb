use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::EventLabel;

/// One node of the decision trie.
///
/// `count` equals the number of projected sequences whose positional prefix
/// matches the label chain from a forest root down to this node. Two
/// sequences share a node only if their labels agree at every position up
/// to the node's depth; divergence at any position creates a sibling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionNode {
    /// The event label this node stands for.
    pub action: EventLabel,
    /// Number of sequences observed through this node. Always >= 1.
    pub count: u64,
    /// Children keyed by next label, in first-observation order.
    pub children: IndexMap<EventLabel, DecisionNode>,
}

impl DecisionNode {
    /// A freshly observed node with a single observation and no children.
    pub fn new(action: impl Into<EventLabel>) -> Self {
        Self {
            action: action.into(),
            count: 1,
            children: IndexMap::new(),
        }
    }

    /// True when no sequence continued past this node.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of nodes in the subtree rooted here, this node included.
    pub fn size(&self) -> usize {
        1 + self.children.values().map(DecisionNode::size).sum::<usize>()
    }
}

/// The forest of root decision nodes, keyed by first-position label.
///
/// A forest rather than a single-rooted tree: a sequence may legitimately
/// start with any selected feature.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DecisionTrie {
    /// Root nodes in first-observation order.
    pub roots: IndexMap<EventLabel, DecisionNode>,
}

impl DecisionTrie {
    /// True when no sequence has been folded in.
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Total number of nodes across the forest.
    pub fn node_count(&self) -> usize {
        self.roots.values().map(DecisionNode::size).sum()
    }

    /// Sum of root counts, i.e. the number of folded sequences.
    pub fn total_count(&self) -> u64 {
        self.roots.values().map(|node| node.count).sum()
    }
}
