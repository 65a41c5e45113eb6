// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Case-insensitive ordered subsequence matching with best-alignment search.
//!
//! A query can usually align with a label in more than one way. "mx" inside
//! "a mutex mix" could use the first `m` (gap 3) or the second (gap 1). Every
//! start position holding the first query character is tried; from a fixed
//! start, greedy leftmost matching of the remaining characters gives the
//! smallest possible end and therefore the smallest gap for that start. The
//! best-scoring start wins, and the earliest start wins a tie.
//!
//! If greedy matching fails from some start it fails from every later start
//! too, so the scan stops there.

use crate::scoring::{score_match, NEUTRAL_SCORE};
use crate::utils::{fold_case, starts_word};

/// Where and how well a query matched one label.
#[derive(Debug, Clone, PartialEq)]
pub struct SubsequenceMatch {
    /// Character indices (into the original label) of the matched characters,
    /// ascending. Empty for the empty query.
    pub positions: Vec<usize>,
    /// Character index of the first matched character.
    pub start: usize,
    /// Label characters skipped between the first and last matched character.
    pub gap: usize,
    /// Score from [`crate::scoring::score_match`].
    pub score: f64,
}

/// Case-folded label with each folded character's source character index.
///
/// Word starts are decided on the source characters. A letter that folds to
/// a letter plus a combining mark must not make the next letter look like
/// the start of a word.
pub(crate) struct FoldedLabel {
    chars: Vec<char>,
    origin: Vec<usize>,
    word_start: Vec<bool>,
}

impl FoldedLabel {
    pub(crate) fn new(label: &str) -> Self {
        let mut chars = Vec::with_capacity(label.len());
        let mut origin = Vec::with_capacity(label.len());
        let mut word_start = Vec::with_capacity(label.len());
        let mut prev = None;
        for (idx, c) in label.chars().enumerate() {
            let begins = starts_word(prev);
            for (n, folded) in c.to_lowercase().enumerate() {
                chars.push(folded);
                origin.push(idx);
                word_start.push(begins && n == 0);
            }
            prev = Some(c);
        }
        Self {
            chars,
            origin,
            word_start,
        }
    }
}

/// Best alignment found in folded coordinates.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Alignment {
    pub start: usize,
    pub gap: usize,
    pub score: f64,
}

/// Greedy leftmost match of `needle[1..]` after `start`. Returns the end position.
fn greedy_end(needle: &[char], hay: &[char], start: usize) -> Option<usize> {
    let mut pos = start;
    for &c in &needle[1..] {
        pos += 1 + hay.get(pos + 1..)?.iter().position(|&h| h == c)?;
    }
    Some(pos)
}

/// Find the best-scoring alignment of a non-empty folded needle.
pub(crate) fn best_alignment(needle: &[char], label: &FoldedLabel) -> Option<Alignment> {
    let hay = &label.chars;
    let first = *needle.first()?;
    if needle.len() > hay.len() {
        return None;
    }

    let mut best: Option<Alignment> = None;
    for start in (0..hay.len()).filter(|&i| hay[i] == first) {
        let Some(end) = greedy_end(needle, hay, start) else {
            break;
        };

        let gap = end - start + 1 - needle.len();
        let score = score_match(start, gap, label.word_start[start]);
        if best.map_or(true, |b| score > b.score) {
            best = Some(Alignment { start, gap, score });
        }
    }
    best
}

/// Match `query` against `label`, returning the best alignment if any.
///
/// The empty query matches everything with [`NEUTRAL_SCORE`] and no positions.
///
/// ```
/// use remedy::find_match;
///
/// let m = find_match("dlm", "Deadlock in mutex").unwrap();
/// assert_eq!(m.positions, vec![0, 4, 12]);
/// assert!(find_match("xyz", "Deadlock in mutex").is_none());
/// ```
pub fn find_match(query: &str, label: &str) -> Option<SubsequenceMatch> {
    let needle = fold_case(query);
    if needle.is_empty() {
        return Some(SubsequenceMatch {
            positions: Vec::new(),
            start: 0,
            gap: 0,
            score: NEUTRAL_SCORE,
        });
    }

    let folded = FoldedLabel::new(label);
    let alignment = best_alignment(&needle, &folded)?;

    // Replay the winning alignment to collect positions
    let mut folded_positions = Vec::with_capacity(needle.len());
    let mut pos = alignment.start;
    folded_positions.push(pos);
    for &c in &needle[1..] {
        pos += 1 + folded.chars.get(pos + 1..)?.iter().position(|&h| h == c)?;
        folded_positions.push(pos);
    }

    let mut positions: Vec<usize> = folded_positions
        .into_iter()
        .map(|p| folded.origin[p])
        .collect();
    // One source character can fold to several matched characters
    positions.dedup();

    Some(SubsequenceMatch {
        start: positions[0],
        positions,
        gap: alignment.gap,
        score: alignment.score,
    })
}

/// Is `query` an ordered, case-insensitive subsequence of `label`?
pub fn matches(query: &str, label: &str) -> bool {
    let needle = fold_case(query);
    needle.is_empty() || best_alignment(&needle, &FoldedLabel::new(label)).is_some()
}
