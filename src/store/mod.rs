// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The record store: sole owner of the notebook's entries.
//!
//! Insertion order is the canonical order. It is what the empty query shows
//! and what ties fall back to, so nothing here ever sorts or dedups. The only
//! ways to change the contents are [`RecordStore::add`] and loading a file.

mod persist;

use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::types::Record;

pub use persist::{load_records, parse_records, save_records};

/// Ordered, append-only collection of records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordStore {
    records: Vec<Record>,
}

impl RecordStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding `records` in the given order.
    pub fn from_records(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Load a store from `path`. A missing file gives an empty store.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        load_records(path).map(Self::from_records)
    }

    /// Replace the contents with what `path` holds.
    ///
    /// On error the current contents are kept.
    pub fn reload(&mut self, path: impl AsRef<Path>) -> Result<()> {
        self.records = load_records(path)?;
        Ok(())
    }

    /// Write the records to `path`, replacing it atomically.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        save_records(path, &self.records)
    }

    /// Append a record and return its position.
    pub fn add(&mut self, record: Record) -> usize {
        let index = self.records.len();
        debug!(index, label = %record.label, "record added");
        self.records.push(record);
        index
    }

    /// All records in insertion order.
    pub fn list(&self) -> &[Record] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn into_records(self) -> Vec<Record> {
        self.records
    }
}

impl From<Vec<Record>> for RecordStore {
    fn from(records: Vec<Record>) -> Self {
        Self::from_records(records)
    }
}
