// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how matches get their numbers and their order.
//!
//! Contiguity dominates everything else. A label that contains the query as a
//! plain substring beats every label that only contains it with gaps, no
//! matter where either one starts. Anchoring (label start, word start) and gap
//! size only separate matches within those two groups.

mod core;
pub mod ranking;

pub use self::core::*;
pub use ranking::compare_matches;
