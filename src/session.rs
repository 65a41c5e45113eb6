//! The interface a front end drives: one session per open notebook.
//!
//! A front end calls [`SearchSession::initialize`] at startup,
//! [`SearchSession::search`] on every query edit,
//! [`SearchSession::add_record`] when the user submits a new entry, and
//! [`SearchSession::persist`] (or [`SearchSession::save`]) on the way out.
//! The session hands back data only; it never renders anything.

use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::Result;
use crate::fuzzy::rank;
use crate::store::RecordStore;
use crate::types::Record;

/// A record store bound to the file it came from, plus ranking.
#[derive(Debug, Clone)]
pub struct SearchSession {
    store: RecordStore,
    path: PathBuf,
}

impl SearchSession {
    /// Open the notebook at `path`, falling back to an empty store on error.
    ///
    /// A missing file is the normal first run. An unreadable or malformed file
    /// is logged and also yields an empty store, so the front end can still
    /// start. Use [`SearchSession::try_initialize`] to see the error instead.
    pub fn initialize(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let store = match RecordStore::load(&path) {
            Ok(store) => store,
            Err(e) => {
                warn!(error = %e, "could not load notebook, continuing with an empty one");
                RecordStore::new()
            }
        };
        Self { store, path }
    }

    /// Open the notebook at `path`, failing on unreadable or malformed files.
    pub fn try_initialize(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let store = RecordStore::load(&path)?;
        Ok(Self { store, path })
    }

    /// A session over an existing store, persisting to `path`.
    pub fn with_store(store: RecordStore, path: impl Into<PathBuf>) -> Self {
        Self {
            store,
            path: path.into(),
        }
    }

    /// Ranked `(label, solution)` pairs for `query`.
    ///
    /// The empty query lists every record in insertion order.
    pub fn on_query_changed(&self, text: &str) -> Vec<(String, String)> {
        let corpus = self.store.list();
        rank(text, corpus)
            .into_iter()
            .map(|m| corpus[m.record_index].to_pair())
            .collect()
    }

    /// Alias of [`SearchSession::on_query_changed`].
    pub fn search(&self, query: &str) -> Vec<(String, String)> {
        self.on_query_changed(query)
    }

    /// Like [`SearchSession::search`] but returns store positions with the
    /// records, for front ends that need to address a result later.
    pub fn search_indexed(&self, query: &str) -> Vec<(usize, &Record)> {
        let corpus = self.store.list();
        rank(query, corpus)
            .into_iter()
            .map(|m| (m.record_index, &corpus[m.record_index]))
            .collect()
    }

    /// Append a record and return its store position.
    ///
    /// The new record is last under the empty query, so a front end showing
    /// the unfiltered list can append it without re-ranking.
    pub fn on_record_added(&mut self, label: &str, solution: &str) -> usize {
        self.store.add(Record::new(label, solution))
    }

    /// Alias of [`SearchSession::on_record_added`].
    pub fn add_record(&mut self, label: &str, solution: &str) -> usize {
        self.on_record_added(label, solution)
    }

    /// The record at store position `index`, for a detail view.
    pub fn record(&self, index: usize) -> Option<&Record> {
        self.store.get(index)
    }

    /// Every record in insertion order.
    pub fn records(&self) -> &[Record] {
        self.store.list()
    }

    /// Write the notebook to `path`.
    ///
    /// A failure leaves both the in-memory records and the previous file
    /// untouched, so the call can simply be retried.
    pub fn persist(&self, path: impl AsRef<Path>) -> Result<()> {
        self.store.save(path)
    }

    /// Write the notebook back to the file it was opened from.
    pub fn save(&self) -> Result<()> {
        self.store.save(&self.path)
    }

    /// The file this session was opened from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }
}
