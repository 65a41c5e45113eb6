// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for corpus ranking.
//!
//! Ranking runs on every keystroke against whatever the user typed, so it has
//! to accept any string without panicking and keep its ordering promises.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use remedy::{find_match, rank, Record, NEUTRAL_SCORE};

/// Fuzz input for ranking
#[derive(Debug, Arbitrary)]
struct RankInput {
    query: String,
    labels: Vec<String>,
}

fn is_subsequence(query: &str, label: &str) -> bool {
    let mut hay = label.chars().flat_map(char::to_lowercase);
    query
        .chars()
        .flat_map(char::to_lowercase)
        .all(|q| hay.any(|h| h == q))
}

fuzz_target!(|input: RankInput| {
    // Cap sizes to avoid timeouts
    let query: String = input.query.chars().take(32).collect();
    let corpus: Vec<Record> = input
        .labels
        .into_iter()
        .take(64)
        .map(|label| Record::new(label.chars().take(128).collect::<String>(), ""))
        .collect();

    let ranked = rank(&query, &corpus);

    // INVARIANT 1: exactly the subsequence matches come back
    let expected = corpus
        .iter()
        .filter(|r| is_subsequence(&query, &r.label))
        .count();
    assert_eq!(ranked.len(), expected, "query={:?}", query);

    // INVARIANT 2: sorted by score, ties in corpus order
    for pair in ranked.windows(2) {
        assert!(pair[0].score >= pair[1].score);
        if pair[0].score == pair[1].score {
            assert!(pair[0].record_index < pair[1].record_index);
        }
    }

    for m in &ranked {
        let record = &corpus[m.record_index];
        assert!(is_subsequence(&query, &record.label));

        // INVARIANT 3: per-label match agrees with the corpus ranking
        let found = find_match(&query, &record.label).expect("ranked label must match");
        assert_eq!(found.score, m.score);
        assert!(found.positions.windows(2).all(|w| w[0] < w[1]));
        assert!(found
            .positions
            .last()
            .map_or(true, |&p| p < record.label.chars().count()));
    }

    // INVARIANT 4: empty query keeps everything in order
    if query.is_empty() {
        assert!(ranked
            .iter()
            .enumerate()
            .all(|(i, m)| m.record_index == i && m.score == NEUTRAL_SCORE));
    }
});
