//! Storage error type for the write path.

use std::path::{Path, PathBuf};

/// Failure to persist or lock the rules file.
///
/// The read path never returns this: it degrades to an empty rule set and
/// logs instead.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The in-memory rule set could not be encoded.
    #[error("serialize rules: {0}")]
    Serialize(#[source] serde_json::Error),
    /// Creating, writing, syncing or renaming a file failed (permissions, disk full).
    #[error("write rules file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The serialization lock could not be taken.
    #[error("lock rules file {}: {source}", path.display())]
    Lock {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn lock(path: &Path, source: std::io::Error) -> Self {
        StoreError::Lock {
            path: path.to_path_buf(),
            source,
        }
    }
}
