//! In-memory implementation of [`StudentStore`].
//!
//! [`InMemoryStore`] is a first-class backend for tests, the gateway's
//! embedded mode, and anywhere persistence isn't needed. It has identical
//! semantics to the SQLite backend.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Mutex;

use scholar_core::StudentId;

use crate::error::StorageError;
use crate::traits::StudentStore;
use crate::types::{InsertOutcome, UserRow};

/// HashMap-backed store guarded by a mutex.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    rows: Mutex<HashMap<StudentId, UserRow>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored rows. Rows stay readable after a writer panicked.
    pub fn len(&self) -> usize {
        self.rows
            .lock()
            .map(|rows| rows.len())
            .unwrap_or_else(|poisoned| poisoned.into_inner().len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl StudentStore for InMemoryStore {
    fn create_user(&self, user: &UserRow) -> Result<InsertOutcome, StorageError> {
        let mut rows = self.rows.lock().map_err(|_| StorageError::LockPoisoned)?;
        match rows.entry(user.id) {
            Entry::Occupied(_) => Ok(InsertOutcome::AlreadyExists),
            Entry::Vacant(slot) => {
                slot.insert(user.clone());
                Ok(InsertOutcome::Inserted)
            }
        }
    }

    fn query_user(&self, id: StudentId) -> Result<Option<UserRow>, StorageError> {
        let rows = self.rows.lock().map_err(|_| StorageError::LockPoisoned)?;
        Ok(rows.get(&id).cloned())
    }
}
