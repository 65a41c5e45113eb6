// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how matches get sorted.
//!
//! Sort order:
//! 1. **Score** - higher wins
//! 2. **Record index** - lower wins, so ties keep corpus order
//!
//! Labels are never compared. Two records with equal scores stay in the order
//! the store holds them, which keeps the list from reshuffling between
//! keystrokes.

use crate::types::Match;
use std::cmp::Ordering;

/// Compare two matches for ranking (`Less` = `a` ranks first).
///
/// Uses `f64::total_cmp`, so the order is total even if a score were NaN.
///
/// ```
/// use remedy::{compare_matches, Match};
/// use std::cmp::Ordering;
///
/// let early = Match { record_index: 2, score: 160.0 };
/// let late = Match { record_index: 4, score: 160.0 };
/// assert_eq!(compare_matches(&early, &late), Ordering::Less);
/// ```
pub fn compare_matches(a: &Match, b: &Match) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| a.record_index.cmp(&b.record_index))
}
