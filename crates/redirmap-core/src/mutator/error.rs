//! Error types for rule mutations.

use crate::store::StoreError;

/// Operator input that produced nothing to store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("host is empty after trimming and sanitizing")]
    EmptyHost,
    #[error("target is empty after trimming and sanitizing")]
    EmptyTarget,
    #[error("no valid `<host> <target>` lines in batch input")]
    NoValidLines,
}

/// Failure of a mutation. Nothing was persisted.
#[derive(Debug, thiserror::Error)]
pub enum MutateError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl MutateError {
    /// True for failures caused by the caller's input rather than storage.
    pub fn is_validation(&self) -> bool {
        matches!(self, MutateError::Validation(_))
    }
}
