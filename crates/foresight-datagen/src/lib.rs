//! # foresight-datagen
//!
//! Synthetic training data for the forecasting pipeline: random walks over
//! a directed scenario graph, with unrelated noise events mixed in between
//! the scripted actions, rendered as timestamped logs or a
//! semicolon-delimited corpus.

pub mod generator;
pub mod log;
pub mod scenario;

pub use generator::LogGenerator;
pub use scenario::ScenarioGraph;
