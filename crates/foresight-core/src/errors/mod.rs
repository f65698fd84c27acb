pub mod datagen_error;
pub mod ingest_error;
pub mod query_error;
pub mod selection_error;

pub use datagen_error::DatagenError;
pub use ingest_error::IngestError;
pub use query_error::QueryError;
pub use selection_error::SelectionError;

/// Umbrella error covering every Foresight subsystem.
///
/// All variants are recoverable at the caller boundary; the core never
/// terminates the host process.
#[derive(Debug, thiserror::Error)]
pub enum ForesightError {
    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error(transparent)]
    Query(#[from] QueryError),

    #[error(transparent)]
    Datagen(#[from] DatagenError),
}

/// Convenience result alias used across the workspace.
pub type ForesightResult<T> = Result<T, ForesightError>;
