//! Operator-facing rendering of analysis results.

use foresight_core::models::{ActionPath, EventLabel, FeatureReport, Probability};
use indexmap::IndexMap;
use serde_json::json;

use crate::pipeline::AnalysisOutcome;

/// The feature report: one numbered line per feature plus the convergence
/// percentage.
pub fn render_features(report: &FeatureReport) -> String {
    let mut out = format!(
        "Found {} features with a relevance of {}%:\n",
        report.features.len(),
        report.converged_percentage
    );
    for feature in &report.features {
        out.push_str(&format!(
            "#{}: {} ({} occurrences)\n",
            feature.rank, feature.label, feature.occurrences
        ));
    }
    out
}

/// The next-step distribution, most probable first.
pub fn render_distribution(distribution: &IndexMap<EventLabel, Probability>) -> String {
    let mut entries: Vec<(&EventLabel, Probability)> =
        distribution.iter().map(|(label, p)| (label, *p)).collect();
    entries.sort_by(|a, b| b.1.value().total_cmp(&a.1.value()));

    let mut out = format!("The {} most probable next steps are:\n", entries.len());
    for (index, (label, probability)) in entries.iter().enumerate() {
        out.push_str(&format!(
            "#{}: {} with {:.2}% probability\n",
            index + 1,
            label,
            probability.as_percent()
        ));
    }
    out
}

/// The top `max_paths` continuation paths, already ranked by the engine.
pub fn render_paths(paths: &[ActionPath], max_paths: usize) -> String {
    let shown = paths.len().min(max_paths);
    let mut out = format!(
        "The {shown} most probable paths (of {} found) are:\n",
        paths.len()
    );
    for (index, path) in paths.iter().take(max_paths).enumerate() {
        out.push_str(&format!(
            "#{}: {} with {:.2}% probability\n",
            index + 1,
            path.joined(),
            path.probability.as_percent()
        ));
    }
    out
}

/// Machine-readable variant of the whole outcome.
pub fn to_json(outcome: &AnalysisOutcome, max_paths: usize) -> serde_json::Value {
    let mut distribution: Vec<(&EventLabel, Probability)> = outcome
        .distribution
        .iter()
        .map(|(label, p)| (label, *p))
        .collect();
    distribution.sort_by(|a, b| b.1.value().total_cmp(&a.1.value()));

    json!({
        "corpus_size": outcome.corpus_size,
        "projected_size": outcome.projected_size,
        "features": outcome.feature_report,
        "next_steps": distribution
            .iter()
            .map(|(label, p)| json!({"label": label, "probability": p.value()}))
            .collect::<Vec<_>>(),
        "paths": outcome.paths
            .iter()
            .take(max_paths)
            .map(|path| json!({"path": path.joined(), "probability": path.probability.value()}))
            .collect::<Vec<_>>(),
    })
}
