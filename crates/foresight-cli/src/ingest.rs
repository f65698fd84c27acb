//! Semicolon-delimited corpus ingestion.

use std::path::Path;

use foresight_core::constants::SEQUENCE_DELIMITER;
use foresight_core::errors::IngestError;
use foresight_core::models::Sequence;
use tracing::info;

/// Read a corpus file into sequences, one row per trace.
///
/// Rows may differ in length. A row that yields no labels at all (only
/// delimiters or whitespace) is malformed rather than silently skipped,
/// and a file with no usable rows is rejected so the pipeline never runs
/// on a degenerate corpus.
pub fn read_corpus(path: &Path) -> Result<Vec<Sequence>, IngestError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(SEQUENCE_DELIMITER)
        .flexible(true)
        .has_headers(false)
        .from_path(path)
        .map_err(|e| IngestError::Io {
            message: e.to_string(),
        })?;

    let mut corpus = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let line = index + 1;
        let record = record.map_err(|_| IngestError::MalformedRow { line })?;
        let labels: Sequence = record
            .iter()
            .map(str::trim)
            .filter(|label| !label.is_empty())
            .map(String::from)
            .collect();
        if labels.is_empty() {
            return Err(IngestError::MalformedRow { line });
        }
        corpus.push(labels);
    }

    if corpus.is_empty() {
        return Err(IngestError::EmptyCorpus);
    }
    info!(rows = corpus.len(), path = %path.display(), "corpus loaded");
    Ok(corpus)
}
