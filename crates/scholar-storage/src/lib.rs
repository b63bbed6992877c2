//! Storage abstraction for student records.
//!
//! Provides the [`StudentStore`] trait defining the Store Adapter contract,
//! plus the [`InMemoryStore`] and [`SqliteStore`] backends.
//!
//! Records are persisted as flat [`UserRow`]s: the embedded college is split
//! into two columns and the email list is joined into one string (see
//! [`convert`]).
//!
//! # Modules
//!
//! - [`error`]: StorageError enum with all failure modes
//! - [`types`]: UserRow and InsertOutcome
//! - [`traits`]: StudentStore trait definition
//! - [`convert`]: Student <-> UserRow conversion and the email codec
//! - [`memory`]: InMemoryStore implementation
//! - [`schema`]: SQL migrations and connection setup
//! - [`sqlite`]: SqliteStore implementation

pub mod convert;
pub mod error;
pub mod memory;
pub mod schema;
pub mod sqlite;
pub mod traits;
pub mod types;

// Re-export key types for ergonomic use.
pub use convert::{join_emails, split_emails, EMAIL_DELIMITER};
pub use error::StorageError;
pub use memory::InMemoryStore;
pub use sqlite::SqliteStore;
pub use traits::StudentStore;
pub use types::{InsertOutcome, UserRow};
