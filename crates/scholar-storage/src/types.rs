//! Storage-layer row type and write outcomes.

use scholar_core::StudentId;

/// A student record as the store holds it.
///
/// `emails` is the delimiter-joined form of the record's email list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRow {
    pub id: StudentId,
    pub name: String,
    pub college_name: String,
    pub college_address: String,
    pub emails: String,
}

/// Outcome of an insert-if-absent write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The row was written.
    Inserted,
    /// A row with the same id was already present; nothing was written.
    AlreadyExists,
}
