// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind match scores.
//!
//! A score is built from three parts:
//!
//! 1. A flat base for any match.
//! 2. A bonus when the matched characters are contiguous (gap 0), i.e. the
//!    query is a case-insensitive substring of the label.
//! 3. An anchor bonus for where the match starts: the very start of the label
//!    earns more than the start of a later word, and mid-word earns nothing.
//!
//! Every character skipped between the first and last matched character costs
//! `GAP_PENALTY`.
//!
//! # Key Invariant: Substring Dominance
//!
//! ```text
//! BASE + CONTIGUOUS_BONUS + 0          (worst substring: mid-word)
//!   > BASE + PREFIX_ANCHOR_BONUS - GAP_PENALTY   (best gapped: label start, 1 gap)
//! 150 > 119
//! ```
//!
//! Label length and absolute position inside the label do not enter the
//! score. "mutex" scores the same in "Deadlock in mutex" and "Race condition
//! for mutex"; both start a word with no gaps, so corpus order decides.
//!
//! | Part               | Value | Applies when                          |
//! |--------------------|-------|---------------------------------------|
//! | BASE_SCORE         | 100.0 | any match                             |
//! | CONTIGUOUS_BONUS   | 50.0  | total gap is 0                        |
//! | PREFIX_ANCHOR_BONUS| 20.0  | match starts at label position 0      |
//! | WORD_ANCHOR_BONUS  | 10.0  | match starts after a non-alphanumeric |
//! | GAP_PENALTY        | 1.0   | per skipped character                 |

/// Score given to every record under the empty query.
pub const NEUTRAL_SCORE: f64 = 0.0;

/// Flat score for any subsequence match.
pub const BASE_SCORE: f64 = 100.0;

/// Bonus for a gap-free match (query is a substring of the label).
pub const CONTIGUOUS_BONUS: f64 = 50.0;

/// Bonus for a match that starts at the first character of the label.
pub const PREFIX_ANCHOR_BONUS: f64 = 20.0;

/// Bonus for a match that starts at the beginning of a later word.
pub const WORD_ANCHOR_BONUS: f64 = 10.0;

/// Cost of each label character skipped between matched characters.
pub const GAP_PENALTY: f64 = 1.0;

/// Score one alignment of the query inside a label.
///
/// `start` is the folded position of the first matched character, `gap` the
/// number of label characters skipped between the first and last matched
/// character, and `word_start` whether `start` begins a word.
pub fn score_match(start: usize, gap: usize, word_start: bool) -> f64 {
    let contiguity = if gap == 0 { CONTIGUOUS_BONUS } else { 0.0 };
    let anchor = if start == 0 {
        PREFIX_ANCHOR_BONUS
    } else if word_start {
        WORD_ANCHOR_BONUS
    } else {
        0.0
    };

    BASE_SCORE + contiguity + anchor - gap as f64 * GAP_PENALTY
}
