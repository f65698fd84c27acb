use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::PATH_DELIMITER;

use super::{EventLabel, Probability};

/// One fully enumerated continuation below a query prefix, paired with its
/// joint probability.
///
/// Derived on demand by the query engine, never stored in the trie. The
/// chain is kept as a genuine label vector and joined without a trailing
/// delimiter when rendered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionPath {
    /// The label chain, prefix-exclusive, in hop order.
    pub actions: Vec<EventLabel>,
    /// Product of each hop's conditional probability.
    pub probability: Probability,
}

impl ActionPath {
    /// The recursion terminal: empty chain, probability 1.
    ///
    /// Constructed fresh at every call site so no value is ever shared
    /// between expansions.
    pub fn terminal() -> Self {
        Self {
            actions: Vec::new(),
            probability: Probability::ONE,
        }
    }

    /// This path with `action` prepended and the joint probability scaled
    /// by `conditional`.
    pub fn prefixed(mut self, action: &str, conditional: Probability) -> Self {
        self.actions.insert(0, action.to_string());
        self.probability = conditional * self.probability;
        self
    }

    /// The delimiter-joined chain, with no trailing delimiter.
    pub fn joined(&self) -> String {
        self.actions.join(PATH_DELIMITER)
    }
}

impl fmt::Display for ActionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.joined())
    }
}
