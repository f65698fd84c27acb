//! Directed scenario graphs and the random walk over them.

use foresight_core::errors::DatagenError;
use indexmap::IndexMap;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Entry node of every walk.
pub const START: &str = "START";
/// A successor list containing this label terminates the walk.
pub const END: &str = "END";
/// A successor list containing this label re-offers the previous node's
/// successors instead of its own.
pub const PREVIOUS: &str = "PREVIOUS";
/// Key of the always-possible action list.
pub const ALWAYS: &str = "*";

/// Walk length cap; a cyclic graph that never offers `END` fails instead
/// of walking forever.
const MAX_WALK_STEPS: usize = 10_000;

/// A directed graph of scenario actions, declared as JSON:
///
/// ```json
/// {
///   "START": ["receive_mail"],
///   "receive_mail": ["open_mail"],
///   "open_mail": ["click_link", "delete_mail"],
///   "click_link": ["END"],
///   "delete_mail": ["END"],
///   "*": ["check_calendar"]
/// }
/// ```
///
/// Conventions: walks start at `START`; a node whose successors contain
/// `END` terminates the walk; the optional `*` list holds actions that stay
/// on offer anywhere until used once; `PREVIOUS` in a successor list
/// re-offers the previous non-wildcard node's successors; a node is never
/// its own successor.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScenarioGraph {
    pub edges: IndexMap<String, Vec<String>>,
}

impl ScenarioGraph {
    /// Parse and validate a JSON scenario document.
    pub fn from_json(text: &str) -> Result<Self, DatagenError> {
        let graph: Self =
            serde_json::from_str(text).map_err(|e| DatagenError::MalformedScenario {
                message: e.to_string(),
            })?;
        graph.validate()?;
        Ok(graph)
    }

    fn validate(&self) -> Result<(), DatagenError> {
        if !self.edges.contains_key(START) {
            return Err(DatagenError::MalformedScenario {
                message: format!("scenario graph has no {START} node"),
            });
        }
        Ok(())
    }

    fn always_possible(&self) -> &[String] {
        self.edges.get(ALWAYS).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Random-walk one trace from `START` until a node offering `END`.
    ///
    /// Options at each step are the current node's successors (or the
    /// previous node's, under `PREVIOUS`), extended by the unused
    /// always-possible actions, deduplicated, with the current node
    /// removed. A node with no remaining options is a dead end and fails
    /// as a malformed scenario.
    pub fn walk<R: Rng>(&self, rng: &mut R) -> Result<Vec<String>, DatagenError> {
        let mut entry = START.to_string();
        let mut previous = entry.clone();
        let mut always_left: Vec<String> = self.always_possible().to_vec();
        let mut actions = Vec::new();

        loop {
            if actions.len() >= MAX_WALK_STEPS {
                return Err(DatagenError::MalformedScenario {
                    message: format!("walk exceeded {MAX_WALK_STEPS} steps without reaching {END}"),
                });
            }
            let successors =
                self.edges
                    .get(&entry)
                    .ok_or_else(|| DatagenError::MalformedScenario {
                        message: format!("node {entry:?} has no successor list"),
                    })?;
            if successors.iter().any(|s| s == END) {
                return Ok(actions);
            }

            let offered: &[String] = if successors.iter().any(|s| s == PREVIOUS) {
                self.edges
                    .get(&previous)
                    .map(Vec::as_slice)
                    .unwrap_or(&[])
            } else {
                successors.as_slice()
            };

            always_left.retain(|action| action != &entry);

            let mut options: Vec<&String> = offered
                .iter()
                .chain(always_left.iter())
                .filter(|option| option.as_str() != entry && option.as_str() != PREVIOUS)
                .collect();
            let mut seen: Vec<&String> = Vec::with_capacity(options.len());
            options.retain(|option| {
                if seen.contains(option) {
                    false
                } else {
                    seen.push(*option);
                    true
                }
            });

            if options.is_empty() {
                return Err(DatagenError::MalformedScenario {
                    message: format!("walk dead-ends at node {entry:?}"),
                });
            }

            let next = options[rng.gen_range(0..options.len())].clone();
            if !self.always_possible().contains(&entry) {
                previous = entry.clone();
            }
            entry = next;
            actions.push(entry.clone());
        }
    }
}
