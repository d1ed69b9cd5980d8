//! Storage error types for posts-storage.

use thiserror::Error;

/// Errors produced by storage operations.
///
/// A missing post on lookup is not an error (lookups return `Option`);
/// [`StorageError::PostNotFound`] is only raised when a write needs a parent
/// post that is absent.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying SQLite failure.
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Schema migration could not be applied.
    #[error("migration error: {0}")]
    Migration(String),

    /// A write referenced a post that does not exist.
    #[error("post not found: {0}")]
    PostNotFound(i64),

    /// A data integrity violation was detected.
    #[error("integrity error: {reason}")]
    IntegrityError { reason: String },
}
