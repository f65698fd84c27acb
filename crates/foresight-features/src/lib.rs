//! # foresight-features
//!
//! Decides which event labels are statistically significant versus
//! background noise, and projects raw sequences down to the selected
//! vocabulary.
//!
//! The selector searches for a target feature count by threshold
//! relaxation: the relevance percentage drops one point per round, and at
//! the floor the target itself is lowered and the percentage resets. The
//! search is bounded and fails loudly instead of returning an empty set.

pub mod projector;
pub mod selector;

pub use projector::project;
pub use selector::{FeatureSelection, FeatureSelector};
