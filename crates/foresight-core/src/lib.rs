//! # foresight-core
//!
//! Foundation crate for the Foresight sequence forecasting engine.
//! Defines the shared models, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;

// Re-export the most commonly used types at the crate root.
pub use config::ForesightConfig;
pub use errors::{ForesightError, ForesightResult};
pub use models::{
    ActionPath, DecisionNode, DecisionTrie, EventLabel, FeatureReport, Probability, Sequence,
};
