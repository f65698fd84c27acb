pub mod path;
pub mod probability;
pub mod report;
pub mod trie;

pub use path::ActionPath;
pub use probability::Probability;
pub use report::{FeatureReport, RankedFeature};
pub use trie::{DecisionNode, DecisionTrie};

/// An opaque, equality-comparable event token. The engine assigns no
/// meaning to the text; the vocabulary is caller-defined.
pub type EventLabel = String;

/// One complete recorded trace of event labels, in observation order.
pub type Sequence = Vec<EventLabel>;
