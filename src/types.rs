// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Core data types: the stored record and the ranking result that points at it.

use serde::{Deserialize, Serialize};

/// A problem/solution pair.
///
/// `label` is what gets searched. `solution` is opaque payload text that is
/// carried along but never matched against. Labels are not unique; two
/// records with the same label are told apart by their position in the store.
///
/// Older notebooks wrote the label under `title` or `bug`. Both are accepted
/// on read and rewritten as `label` on the next save.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Record {
    #[serde(alias = "title", alias = "bug")]
    pub label: String,
    pub solution: String,
}

impl Record {
    pub fn new(label: impl Into<String>, solution: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            solution: solution.into(),
        }
    }

    /// The `(label, solution)` projection handed to the presentation layer.
    pub fn to_pair(&self) -> (String, String) {
        (self.label.clone(), self.solution.clone())
    }
}

/// A ranked reference into the corpus.
///
/// Holds the position of the record, never a copy of it. Higher `score` is a
/// better match; see [`crate::scoring`] for how scores are built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Match {
    /// Position of the record in the corpus that was ranked.
    pub record_index: usize,
    /// Rank value (higher = better).
    pub score: f64,
}
