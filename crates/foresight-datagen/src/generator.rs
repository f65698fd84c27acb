//! Corpus generation: scenario walks with noise events mixed in between.

use foresight_core::config::DatagenConfig;
use foresight_core::errors::DatagenError;
use foresight_core::models::Sequence;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::scenario::ScenarioGraph;

/// Generates corpora of noisy scenario traces.
pub struct LogGenerator {
    config: DatagenConfig,
}

impl LogGenerator {
    pub fn new(config: DatagenConfig) -> Self {
        Self { config }
    }

    fn rng(&self) -> StdRng {
        match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Generate the configured number of traces, each one a random walk of
    /// a randomly chosen graph with noise mixed in.
    pub fn generate(&self, graphs: &[ScenarioGraph]) -> Result<Vec<Sequence>, DatagenError> {
        if graphs.is_empty() {
            return Err(DatagenError::MalformedScenario {
                message: "no scenario graphs given".to_string(),
            });
        }

        let mut rng = self.rng();
        let mut corpus = Vec::with_capacity(self.config.amount);
        for _ in 0..self.config.amount {
            let graph = &graphs[rng.gen_range(0..graphs.len())];
            let actions = graph.walk(&mut rng)?;
            let mut noise = noise_pool(actions.len(), &mut rng);
            let max_between = self.config.max_between.unwrap_or_else(|| {
                (noise.len() as f64 * self.config.max_between_fraction) as usize
            });
            corpus.push(mix(
                &actions,
                &mut noise,
                max_between,
                self.config.mix_probability,
                &mut rng,
            ));
        }

        info!(traces = corpus.len(), "corpus generated");
        Ok(corpus)
    }
}

/// One `randomevent<N>` filler label per scenario action.
fn noise_pool<R: Rng>(amount: usize, rng: &mut R) -> Vec<String> {
    (0..amount)
        .map(|_| format!("randomevent{}", rng.gen_range(0..=1000)))
        .collect()
}

/// Mix noise entries between scenario actions.
///
/// After each action, with `mix_probability` percent chance, up to
/// `max_between` entries are drained from the front of the noise pool.
/// The pool is consumed left to right and leftovers are discarded.
fn mix<R: Rng>(
    actions: &[String],
    noise: &mut Vec<String>,
    max_between: usize,
    mix_probability: f64,
    rng: &mut R,
) -> Sequence {
    let mut mixed = Vec::with_capacity(actions.len() + noise.len());
    for action in actions {
        mixed.push(action.clone());
        if max_between == 0 || noise.is_empty() {
            continue;
        }
        if (rng.gen_range(0..100) as f64) < mix_probability {
            let take = rng.gen_range(0..=max_between).min(noise.len());
            mixed.extend(noise.drain(..take));
        }
    }
    mixed
}
