//! # foresight-trie
//!
//! Compresses projected event sequences into a forest of count-annotated
//! prefix nodes. Construction is the only phase that mutates nodes; the
//! finished trie is read-only for the rest of the run.

pub mod builder;

pub use builder::build;
