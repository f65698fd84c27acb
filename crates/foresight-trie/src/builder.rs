//! Incremental folding of sequences into a shared prefix forest.

use foresight_core::models::{DecisionNode, DecisionTrie, Sequence};
use tracing::debug;

/// Fold every sequence into a count-annotated prefix forest.
///
/// Each sequence is inserted as a labelled path: every node traversed gets
/// its count incremented, every missing node is created with a count of
/// one. An exhausted sequence ends its fold without creating anything, so
/// empty sequences contribute nothing. Final counts do not depend on the
/// order sequences are folded in.
pub fn build(sequences: &[Sequence]) -> DecisionTrie {
    let mut trie = DecisionTrie::default();
    for sequence in sequences {
        fold(&mut trie, sequence);
    }
    debug!(
        roots = trie.roots.len(),
        nodes = trie.node_count(),
        "trie built"
    );
    trie
}

fn fold(trie: &mut DecisionTrie, sequence: &Sequence) {
    let mut level = &mut trie.roots;
    for label in sequence {
        let node = level
            .entry(label.clone())
            .and_modify(|node| node.count += 1)
            .or_insert_with(|| DecisionNode::new(label.clone()));
        level = &mut node.children;
    }
}
