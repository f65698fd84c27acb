/// Synthetic log generation errors.
#[derive(Debug, thiserror::Error)]
pub enum DatagenError {
    #[error("scenario graph error: {message}")]
    MalformedScenario { message: String },

    #[error("I/O error: {message}")]
    Io { message: String },
}
