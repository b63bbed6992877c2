//! The [`StudentStore`] trait defining the storage contract for student
//! records.
//!
//! All backends (InMemoryStore, SqliteStore, test doubles) implement this
//! trait, so the record service can swap them without changing its logic.

use scholar_core::StudentId;

use crate::error::StorageError;
use crate::types::{InsertOutcome, UserRow};

/// The storage contract for student records.
///
/// Methods take `&self`: backends are shared across concurrently running
/// request tasks and guard their state internally. The trait is synchronous;
/// every call is expected to complete in bounded time.
pub trait StudentStore: Send + Sync {
    /// Inserts `user` unless a row with the same id already exists.
    ///
    /// The existence check and the write are a single atomic step, so
    /// concurrent inserts of one id write exactly one row and every other
    /// caller observes [`InsertOutcome::AlreadyExists`].
    fn create_user(&self, user: &UserRow) -> Result<InsertOutcome, StorageError>;

    /// Retrieves the row for `id`, or `Ok(None)` if there is none.
    fn query_user(&self, id: StudentId) -> Result<Option<UserRow>, StorageError>;
}
