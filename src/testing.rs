//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixtures so every test ranks the same corpus.

#![doc(hidden)]

use crate::types::Record;

/// Labels of the five-record sample corpus, in corpus order.
pub const SAMPLE_LABELS: [&str; 5] = [
    "Null pointer dereference",
    "Race condition in goroutine",
    "Race condition for mutex",
    "Channel closed twice",
    "Deadlock in mutex",
];

/// Create a record whose solution is derived from the label.
pub fn make_record(label: &str) -> Record {
    Record::new(label, format!("Fix for {}", label))
}

/// The five-record sample corpus.
///
/// This is the canonical implementation used across all tests.
pub fn sample_corpus() -> Vec<Record> {
    SAMPLE_LABELS.iter().map(|label| make_record(label)).collect()
}
