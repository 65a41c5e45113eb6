// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching: ordered subsequence search over record labels.
//!
//! A label matches when every query character appears in it, in order,
//! ignoring case. Characters in between can be skipped. `find_match` scores
//! one label; `rank` scores a whole corpus and sorts it.

mod rank;
mod subsequence;

pub use rank::rank;
pub use subsequence::{find_match, matches, SubsequenceMatch};
