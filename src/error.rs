//! Error types for the task record store.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures while reading or appending to the task collection.
///
/// None of these are retried. The binary logs them and exits non-zero.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Creating, reading, writing or renaming a file failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The existing file is not a JSON array of tasks.
    #[error("{} is not a valid task list: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The collection could not be serialised.
    #[error("failed to encode task list: {0}")]
    Encode(#[source] serde_json::Error),

    /// Another writer holds the append lock.
    #[error("{} is locked by another writer", path.display())]
    Locked { path: PathBuf },
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        StoreError::Io { path: path.into(), source }
    }
}
