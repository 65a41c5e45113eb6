// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Corpus ranking: score every label, drop the misses, sort once.

use tracing::debug;

use super::subsequence::{best_alignment, FoldedLabel};
use crate::scoring::{compare_matches, NEUTRAL_SCORE};
use crate::types::{Match, Record};
use crate::utils::fold_case;

/// Rank a corpus against a query.
///
/// Labels that do not contain the query as a case-insensitive ordered
/// subsequence are left out. The rest are sorted by score, best first, with
/// ties kept in corpus order.
///
/// The empty query is the "clear search" state: every record comes back in
/// corpus order with [`NEUTRAL_SCORE`].
///
/// Pure and deterministic. The corpus is only read.
///
/// ```
/// use remedy::{rank, Record};
///
/// let corpus = vec![
///     Record::new("Race condition for mutex", "lock ordering"),
///     Record::new("Channel closed twice", "close once"),
///     Record::new("Deadlock in mutex", "avoid nested locks"),
/// ];
///
/// let ranked = rank("mutex", &corpus);
/// let indices: Vec<usize> = ranked.iter().map(|m| m.record_index).collect();
/// assert_eq!(indices, vec![0, 2]);
/// ```
pub fn rank(query: &str, corpus: &[Record]) -> Vec<Match> {
    let needle = fold_case(query);

    if needle.is_empty() {
        return (0..corpus.len())
            .map(|record_index| Match {
                record_index,
                score: NEUTRAL_SCORE,
            })
            .collect();
    }

    let mut ranked: Vec<Match> = corpus
        .iter()
        .enumerate()
        .filter_map(|(record_index, record)| {
            let label = FoldedLabel::new(&record.label);
            best_alignment(&needle, &label).map(|alignment| Match {
                record_index,
                score: alignment.score,
            })
        })
        .collect();

    ranked.sort_by(compare_matches);

    debug!(
        query,
        corpus = corpus.len(),
        matched = ranked.len(),
        "ranked corpus"
    );
    ranked
}
