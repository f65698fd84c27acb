use foresight_core::models::Sequence;
use foresight_query::QueryEngine;
use proptest::prelude::*;

fn arb_corpus() -> impl Strategy<Value = Vec<Sequence>> {
    prop::collection::vec(
        prop::collection::vec("[a-c]", 1..5).prop_map(|labels| labels.into_iter().collect()),
        1..15,
    )
}

proptest! {
    #[test]
    fn top_level_distribution_sums_to_one(corpus in arb_corpus()) {
        let engine = QueryEngine::new(foresight_trie::build(&corpus));
        let distribution = engine.next_step_probabilities(&[]).unwrap();
        let total: f64 = distribution.values().map(|p| p.value()).sum();
        prop_assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn full_enumeration_sums_to_one(corpus in arb_corpus()) {
        let engine = QueryEngine::new(foresight_trie::build(&corpus));
        let paths = engine.enumerate_paths(&[]).unwrap();
        let total: f64 = paths.iter().map(|p| p.probability.value()).sum();
        prop_assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn enumeration_is_ranked_descending(corpus in arb_corpus()) {
        let engine = QueryEngine::new(foresight_trie::build(&corpus));
        let paths = engine.enumerate_paths(&[]).unwrap();
        for window in paths.windows(2) {
            prop_assert!(window[0].probability.value() >= window[1].probability.value());
        }
    }

    #[test]
    fn repeated_enumeration_is_identical(corpus in arb_corpus()) {
        let engine = QueryEngine::new(foresight_trie::build(&corpus));
        let first = engine.enumerate_paths(&[]).unwrap();
        let second = engine.enumerate_paths(&[]).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn one_path_per_distinct_full_sequence(corpus in arb_corpus()) {
        // Leaves of the trie are exactly the distinct sequences that are
        // not proper prefixes of other sequences.
        let engine = QueryEngine::new(foresight_trie::build(&corpus));
        let paths = engine.enumerate_paths(&[]).unwrap();

        let mut distinct: Vec<&Sequence> = corpus
            .iter()
            .filter(|candidate| {
                !corpus
                    .iter()
                    .any(|other| other.len() > candidate.len() && other.starts_with(candidate.as_slice()))
            })
            .collect();
        distinct.sort();
        distinct.dedup();
        prop_assert_eq!(paths.len(), distinct.len());
    }

    #[test]
    fn no_rendered_path_has_a_trailing_delimiter(corpus in arb_corpus()) {
        let engine = QueryEngine::new(foresight_trie::build(&corpus));
        for path in engine.enumerate_paths(&[]).unwrap() {
            let rendered = path.joined();
            prop_assert!(!rendered.ends_with(','));
            prop_assert!(!rendered.is_empty());
        }
    }
}
