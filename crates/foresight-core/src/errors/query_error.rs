/// Query-layer errors.
///
/// The two variants are deliberately distinct: a prefix the corpus never
/// observed is not the same condition as a prefix that exists but was never
/// continued past. Both are recoverable at the caller boundary.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// `label` is absent at zero-based `position` of the descent.
    #[error("prefix not found: no observed continuation {label:?} at step {position}")]
    PrefixNotFound { position: usize, label: String },

    /// The prefix resolves to a node the corpus never continued past.
    #[error("no continuation recorded after the given prefix")]
    NoContinuation,
}
