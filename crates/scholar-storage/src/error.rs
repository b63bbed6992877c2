//! Storage error types for scholar-storage.
//!
//! A missing record is not an error at this layer: lookups return
//! `Ok(None)`. [`StorageError`] covers only genuine backend failures.

use thiserror::Error;

/// Errors produced by storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The SQLite driver reported a failure.
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Applying schema migrations failed.
    #[error("migration error: {0}")]
    Migration(String),

    /// A thread panicked while holding the backend lock.
    #[error("storage lock poisoned")]
    LockPoisoned,
}
