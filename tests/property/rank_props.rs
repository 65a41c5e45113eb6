//! Ranking invariants.

use proptest::prelude::*;
use remedy::{rank, Record, NEUTRAL_SCORE};

// ============================================================================
// ORACLE
// ============================================================================

/// Naive case-insensitive ordered subsequence check.
fn oracle_is_subsequence(query: &str, label: &str) -> bool {
    let mut hay = label.chars().flat_map(char::to_lowercase);
    query
        .chars()
        .flat_map(char::to_lowercase)
        .all(|q| hay.any(|h| h == q))
}

// ============================================================================
// STRATEGIES
// ============================================================================

/// Labels over a small alphabet so random queries actually hit.
fn label_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-eA-E _-]{0,16}").unwrap()
}

/// Labels with arbitrary printable Unicode.
fn unicode_label_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("\\PC{0,12}").unwrap()
}

fn corpus_strategy(label: impl Strategy<Value = String>) -> impl Strategy<Value = Vec<Record>> {
    prop::collection::vec(label.prop_map(|l| Record::new(l, "s")), 0..12)
}

fn query_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-eA-E ]{0,4}").unwrap()
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    /// Property: rank returns exactly the labels the oracle accepts.
    #[test]
    fn prop_results_are_exactly_subsequence_matches(
        query in query_strategy(),
        corpus in corpus_strategy(label_strategy()),
    ) {
        let ranked = rank(&query, &corpus);
        let mut returned: Vec<usize> = ranked.iter().map(|m| m.record_index).collect();
        returned.sort_unstable();

        let expected: Vec<usize> = corpus
            .iter()
            .enumerate()
            .filter(|(_, r)| oracle_is_subsequence(&query, &r.label))
            .map(|(i, _)| i)
            .collect();

        prop_assert_eq!(returned, expected);
    }

    /// Property: the oracle agrees on arbitrary Unicode too.
    #[test]
    fn prop_unicode_matches_agree_with_oracle(
        query in prop::string::string_regex("\\PC{0,3}").unwrap(),
        corpus in corpus_strategy(unicode_label_strategy()),
    ) {
        for m in rank(&query, &corpus) {
            prop_assert!(oracle_is_subsequence(&query, &corpus[m.record_index].label));
        }
        for (i, r) in corpus.iter().enumerate() {
            if oracle_is_subsequence(&query, &r.label) {
                prop_assert!(rank(&query, &corpus).iter().any(|m| m.record_index == i));
            }
        }
    }

    /// Property: the empty query returns the whole corpus in order.
    #[test]
    fn prop_empty_query_returns_corpus_in_order(corpus in corpus_strategy(unicode_label_strategy())) {
        let ranked = rank("", &corpus);
        prop_assert_eq!(ranked.len(), corpus.len());
        for (i, m) in ranked.iter().enumerate() {
            prop_assert_eq!(m.record_index, i);
            prop_assert_eq!(m.score, NEUTRAL_SCORE);
        }
    }

    /// Property: scores never increase down the list, and equal scores keep
    /// corpus order.
    #[test]
    fn prop_sorted_and_stable(
        query in query_strategy(),
        corpus in corpus_strategy(label_strategy()),
    ) {
        let ranked = rank(&query, &corpus);
        for pair in ranked.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
            if pair[0].score == pair[1].score {
                prop_assert!(pair[0].record_index < pair[1].record_index);
            }
        }
    }

    /// Property: ranking is deterministic.
    #[test]
    fn prop_deterministic(
        query in query_strategy(),
        corpus in corpus_strategy(label_strategy()),
    ) {
        prop_assert_eq!(rank(&query, &corpus), rank(&query, &corpus));
    }

    /// Property: a label holding the query as a substring outranks one that
    /// only holds it with gaps.
    #[test]
    fn prop_substring_beats_gapped(
        query in prop::string::string_regex("[a-z]{2,6}").unwrap(),
        prefix in prop::string::string_regex("[a-z ]{0,8}").unwrap(),
    ) {
        let spread: String = query.chars().map(|c| c.to_string()).collect::<Vec<_>>().join("_");
        let corpus = vec![
            Record::new(spread, "gapped"),
            Record::new(format!("{}{}", prefix, query), "contiguous"),
        ];

        let ranked = rank(&query, &corpus);
        prop_assert_eq!(ranked.len(), 2);
        prop_assert_eq!(ranked[0].record_index, 1);
        prop_assert!(ranked[0].score > ranked[1].score);
    }

    /// Property: case of the query never changes the result.
    #[test]
    fn prop_query_case_insensitive(
        query in query_strategy(),
        corpus in corpus_strategy(label_strategy()),
    ) {
        prop_assert_eq!(rank(&query.to_uppercase(), &corpus), rank(&query.to_lowercase(), &corpus));
    }
}
