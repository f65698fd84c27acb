/// Feature-search errors.
#[derive(Debug, thiserror::Error)]
pub enum SelectionError {
    #[error("corpus is empty: feature search needs at least one sequence")]
    EmptyCorpus,

    #[error(
        "feature search did not converge after {rounds} rounds \
         (target {target_features} features, floor {floor}%)"
    )]
    NonConvergent {
        rounds: u32,
        target_features: usize,
        floor: u32,
    },
}
