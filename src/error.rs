//! Errors surfaced by the record store.
//!
//! Two kinds only: the file could not be read or written, or its content was
//! not a JSON array of records. Ranking has no error states.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failure while loading or saving the notebook file.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The file could not be read, written, or renamed into place.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file was read but is not a well-formed array of records.
    #[error("malformed notebook {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl StoreError {
    pub(crate) fn io(path: &Path, source: io::Error) -> Self {
        StoreError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn parse(path: &Path, source: serde_json::Error) -> Self {
        StoreError::Parse {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Path of the file the operation was working on.
    pub fn path(&self) -> &Path {
        match self {
            StoreError::Io { path, .. } | StoreError::Parse { path, .. } => path,
        }
    }

    pub fn is_io(&self) -> bool {
        matches!(self, StoreError::Io { .. })
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, StoreError::Parse { .. })
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
