/// Corpus ingestion errors.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("failed to read corpus: {message}")]
    Io { message: String },

    #[error("row {line} could not be split into event labels")]
    MalformedRow { line: usize },

    #[error("corpus contains no usable rows")]
    EmptyCorpus,
}
