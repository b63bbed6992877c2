//! In-memory index of student records.
//!
//! [`RecordCache`] sits in front of the store and is consulted first on
//! every lookup. It never evicts and never errors.

use dashmap::DashMap;

use scholar_core::{Student, StudentId};

/// Concurrent id -> record map.
///
/// Backed by `DashMap` for concurrent lock-free access from multiple async
/// handler tasks. Writes to the same id are last-write-wins.
#[derive(Debug, Default)]
pub struct RecordCache {
    entries: DashMap<StudentId, Student>,
}

impl RecordCache {
    /// Creates a new empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a clone of the cached record, if present.
    pub fn get(&self, id: StudentId) -> Option<Student> {
        self.entries.get(&id).map(|entry| entry.clone())
    }

    /// Stores `student` under `id`, replacing any previous entry.
    pub fn put(&self, id: StudentId, student: Student) {
        self.entries.insert(id, student);
    }

    pub fn contains(&self, id: StudentId) -> bool {
        self.entries.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
