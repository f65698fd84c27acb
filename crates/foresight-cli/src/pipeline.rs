//! End-to-end orchestration: select → project → build → query.

use foresight_core::config::{QueryConfig, SelectionConfig};
use foresight_core::errors::ForesightResult;
use foresight_core::models::{ActionPath, EventLabel, FeatureReport, Probability, Sequence};
use foresight_features::{project, FeatureSelector};
use foresight_query::QueryEngine;
use indexmap::IndexMap;
use tracing::info;

/// Everything one analysis run produces.
#[derive(Debug)]
pub struct AnalysisOutcome {
    pub feature_report: FeatureReport,
    /// Next-step distribution after the configured prefix.
    pub distribution: IndexMap<EventLabel, Probability>,
    /// All continuations after the prefix, ranked descending.
    pub paths: Vec<ActionPath>,
    pub corpus_size: usize,
    pub projected_size: usize,
}

/// Run the full pipeline over an in-memory corpus.
///
/// Data flows strictly downstream: raw sequences → selected features →
/// projected sequences → trie → query results. Errors from any stage are
/// surfaced with their stage-specific type; none are fatal to the host.
pub fn run(
    corpus: &[Sequence],
    selection: &SelectionConfig,
    query: &QueryConfig,
) -> ForesightResult<AnalysisOutcome> {
    let selector = FeatureSelector::new(selection.clone());
    let selected = selector.select(corpus)?;

    let projected = project(corpus, &selected.features);
    info!(
        raw = corpus.len(),
        projected = projected.len(),
        "sequences projected"
    );

    let trie = foresight_trie::build(&projected);
    let engine = QueryEngine::new(trie);

    let prefix = &query.completed_actions;
    let distribution = engine.next_step_probabilities(prefix)?;
    let paths = engine.enumerate_paths(prefix)?;

    Ok(AnalysisOutcome {
        feature_report: selected.report,
        distribution,
        paths,
        corpus_size: corpus.len(),
        projected_size: projected.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use foresight_core::errors::{ForesightError, QueryError};

    fn corpus() -> Vec<Sequence> {
        // "checkout" and "browse" dominate; one-off noise labels fall below
        // any reasonable threshold.
        (0..10)
            .map(|i| {
                vec![
                    "browse".to_string(),
                    format!("randomevent{i}"),
                    "checkout".to_string(),
                ]
            })
            .collect()
    }

    fn selection() -> SelectionConfig {
        SelectionConfig {
            expected_features: 2,
            start_percentage: 80,
            ..SelectionConfig::default()
        }
    }

    #[test]
    fn full_pipeline_forecasts_from_empty_prefix() {
        let outcome = run(&corpus(), &selection(), &QueryConfig::default()).unwrap();

        assert_eq!(outcome.corpus_size, 10);
        assert_eq!(outcome.projected_size, 10);
        assert_eq!(outcome.feature_report.features.len(), 2);

        // Every projected sequence is browse → checkout.
        assert!((outcome.distribution["browse"].value() - 1.0).abs() < 1e-12);
        assert_eq!(outcome.paths.len(), 1);
        assert_eq!(outcome.paths[0].joined(), "browse,checkout");
    }

    #[test]
    fn unobserved_prefix_surfaces_prefix_not_found() {
        let query = QueryConfig {
            completed_actions: vec!["refund".to_string()],
            ..QueryConfig::default()
        };
        let err = run(&corpus(), &selection(), &query).unwrap_err();
        assert!(matches!(
            err,
            ForesightError::Query(QueryError::PrefixNotFound { .. })
        ));
    }
}
