//! SQLite implementation of [`StudentStore`].
//!
//! [`SqliteStore`] persists student rows in a SQLite database with WAL mode
//! and automatic schema migrations. The `id` primary key enforces uniqueness;
//! inserts use `ON CONFLICT DO NOTHING` so insert-if-absent is one statement.

use std::sync::{Mutex, MutexGuard};

use rusqlite::{params, Connection, OptionalExtension};

use scholar_core::StudentId;

use crate::error::StorageError;
use crate::traits::StudentStore;
use crate::types::{InsertOutcome, UserRow};

/// SQLite-backed implementation of [`StudentStore`].
///
/// `rusqlite::Connection` is `!Sync`, so the connection sits behind a mutex
/// and calls are serialized.
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Opens (or creates) a SQLite database at `path`.
    pub fn new(path: &str) -> Result<Self, StorageError> {
        let conn = crate::schema::open_database(path)?;
        Ok(SqliteStore {
            conn: Mutex::new(conn),
        })
    }

    /// Opens an in-memory SQLite database (for testing).
    pub fn in_memory() -> Result<Self, StorageError> {
        let conn = crate::schema::open_in_memory()?;
        Ok(SqliteStore {
            conn: Mutex::new(conn),
        })
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>, StorageError> {
        self.conn.lock().map_err(|_| StorageError::LockPoisoned)
    }
}

impl StudentStore for SqliteStore {
    fn create_user(&self, user: &UserRow) -> Result<InsertOutcome, StorageError> {
        let conn = self.conn()?;
        let changed = conn.execute(
            "INSERT INTO users (id, name, college_name, college_address, emails)
             VALUES (?1, ?2, ?3, ?4, ?5)
             ON CONFLICT(id) DO NOTHING",
            params![
                user.id,
                user.name,
                user.college_name,
                user.college_address,
                user.emails,
            ],
        )?;
        if changed == 0 {
            Ok(InsertOutcome::AlreadyExists)
        } else {
            Ok(InsertOutcome::Inserted)
        }
    }

    fn query_user(&self, id: StudentId) -> Result<Option<UserRow>, StorageError> {
        let conn = self.conn()?;
        let row = conn
            .query_row(
                "SELECT id, name, college_name, college_address, emails FROM users WHERE id = ?1",
                params![id],
                |row| {
                    Ok(UserRow {
                        id: row.get(0)?,
                        name: row.get(1)?,
                        college_name: row.get(2)?,
                        college_address: row.get(3)?,
                        emails: row.get(4)?,
                    })
                },
            )
            .optional()?;
        Ok(row)
    }
}
