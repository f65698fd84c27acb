//! Timestamped log rendering and corpus emission.

use std::path::Path;

use chrono::{DateTime, Duration, Utc};
use foresight_core::constants::SEQUENCE_DELIMITER;
use foresight_core::errors::DatagenError;
use foresight_core::models::Sequence;
use rand::Rng;
use tracing::info;

const THIRTY_DAYS_MS: i64 = 1000 * 60 * 60 * 24 * 30;
const FIVE_MINUTES_MS: i64 = 1000 * 60 * 5;

/// Render one trace as `<iso-timestamp>\t<label>` lines.
///
/// The trace starts at a random instant within the last thirty days and
/// each entry advances by up to five minutes, like a real session log.
pub fn render_log_lines<R: Rng>(trace: &Sequence, rng: &mut R) -> Vec<String> {
    let mut at: DateTime<Utc> =
        Utc::now() - Duration::milliseconds(rng.gen_range(0..THIRTY_DAYS_MS));
    trace
        .iter()
        .map(|label| {
            at += Duration::milliseconds(rng.gen_range(0..FIVE_MINUTES_MS));
            format!("{}\t{}", at.to_rfc3339(), label)
        })
        .collect()
}

/// Write the corpus as semicolon-delimited rows, one trace per row.
pub fn write_corpus(path: &Path, corpus: &[Sequence]) -> Result<(), DatagenError> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(SEQUENCE_DELIMITER)
        .flexible(true)
        .has_headers(false)
        .from_path(path)
        .map_err(|e| DatagenError::Io {
            message: e.to_string(),
        })?;

    for trace in corpus {
        writer.write_record(trace).map_err(|e| DatagenError::Io {
            message: e.to_string(),
        })?;
    }
    writer.flush().map_err(|e| DatagenError::Io {
        message: e.to_string(),
    })?;

    info!(rows = corpus.len(), path = %path.display(), "corpus written");
    Ok(())
}
