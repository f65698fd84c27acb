//! End-to-end query scenarios over a freshly built trie.

use foresight_core::errors::QueryError;
use foresight_core::models::Sequence;
use foresight_query::QueryEngine;

fn corpus(rows: &[&[&str]]) -> Vec<Sequence> {
    rows.iter()
        .map(|row| row.iter().map(|s| s.to_string()).collect())
        .collect()
}

fn engine(rows: &[&[&str]]) -> QueryEngine {
    QueryEngine::new(foresight_trie::build(&corpus(rows)))
}

fn prefix(labels: &[&str]) -> Vec<String> {
    labels.iter().map(|s| s.to_string()).collect()
}

#[test]
fn distribution_sums_to_one_at_every_observed_prefix() {
    let engine = engine(&[
        &["login", "read", "reply"],
        &["login", "read", "archive"],
        &["login", "search"],
        &["logout"],
    ]);

    for p in [
        prefix(&[]),
        prefix(&["login"]),
        prefix(&["login", "read"]),
    ] {
        let distribution = engine.next_step_probabilities(&p).unwrap();
        let total: f64 = distribution.values().map(|p| p.value()).sum();
        assert!((total - 1.0).abs() < 1e-9, "sum at {p:?} was {total}");
    }
}

#[test]
fn path_probabilities_partition_the_prefix_mass() {
    let engine = engine(&[
        &["login", "read", "reply"],
        &["login", "read", "archive"],
        &["login", "search"],
        &["logout"],
    ]);

    let paths = engine.enumerate_paths(&prefix(&["login"])).unwrap();
    let total: f64 = paths.iter().map(|p| p.probability.value()).sum();
    assert!((total - 1.0).abs() < 1e-9);
}

#[test]
fn reference_scenario_counts_and_distribution() {
    // Corpus [[a,b,c],[a,b,d],[a,e]]: root a count 3, children b=2 e=1.
    let engine = engine(&[&["a", "b", "c"], &["a", "b", "d"], &["a", "e"]]);

    let trie = engine.trie();
    assert_eq!(trie.roots["a"].count, 3);
    assert_eq!(trie.roots["a"].children["b"].count, 2);
    assert_eq!(trie.roots["a"].children["e"].count, 1);

    let distribution = engine.next_step_probabilities(&prefix(&["a"])).unwrap();
    assert!((distribution["b"].value() - 0.667).abs() < 1e-3);
    assert!((distribution["e"].value() - 0.333).abs() < 1e-3);
}

#[test]
fn reference_scenario_paths() {
    let engine = engine(&[&["a", "b", "c"], &["a", "b", "d"], &["a", "e"]]);
    let paths = engine.enumerate_paths(&prefix(&["a"])).unwrap();

    let mut rendered: Vec<(String, f64)> = paths
        .iter()
        .map(|p| (p.joined(), p.probability.value()))
        .collect();
    rendered.sort_by(|a, b| a.0.cmp(&b.0));

    assert_eq!(rendered.len(), 3);
    for (path, probability) in &rendered {
        assert!(
            (probability - 1.0 / 3.0).abs() < 1e-9,
            "{path} had probability {probability}"
        );
        assert!(!path.ends_with(','));
    }
    assert_eq!(rendered[0].0, "b,c");
    assert_eq!(rendered[1].0, "b,d");
    assert_eq!(rendered[2].0, "e");
}

#[test]
fn never_observed_first_step_is_prefix_not_found() {
    let engine = engine(&[&["a", "b"]]);
    let err = engine.enumerate_paths(&prefix(&["z"])).unwrap_err();
    match err {
        QueryError::PrefixNotFound { position, label } => {
            assert_eq!(position, 0);
            assert_eq!(label, "z");
        }
        other => panic!("expected PrefixNotFound, got {other}"),
    }
}

#[test]
fn prefix_not_found_and_no_continuation_stay_distinct() {
    let engine = engine(&[&["a", "b"]]);

    // "a,b" exists but was never continued past.
    assert!(matches!(
        engine.enumerate_paths(&prefix(&["a", "b"])).unwrap_err(),
        QueryError::NoContinuation
    ));
    // "a,c" was never observed at all.
    assert!(matches!(
        engine.enumerate_paths(&prefix(&["a", "c"])).unwrap_err(),
        QueryError::PrefixNotFound { .. }
    ));
}

#[test]
fn deep_prefix_descends_hop_by_hop() {
    let engine = engine(&[
        &["a", "b", "c", "d"],
        &["a", "b", "c", "e"],
        &["a", "b", "f"],
    ]);
    let distribution = engine
        .next_step_probabilities(&prefix(&["a", "b", "c"]))
        .unwrap();
    assert_eq!(distribution.len(), 2);
    assert!((distribution["d"].value() - 0.5).abs() < 1e-12);
    assert!((distribution["e"].value() - 0.5).abs() < 1e-12);
}
