//! Student record and the request/response types of the record service.
//!
//! Field names follow the service IDL, so the JSON produced here is what
//! gateway clients see inside the envelope's `data` field. Emails travel as
//! `email` (a list), matching the IDL field name.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a student record.
pub type StudentId = i32;

/// The college a student belongs to. Embedded in [`Student`], it has no
/// lifecycle of its own.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct College {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
}

/// A student record.
///
/// `id` is the primary key and never changes once registered. `emails` keeps
/// insertion order; semantically it is a set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub college: College,
    #[serde(rename = "email", default)]
    pub emails: Vec<String>,
}

impl Student {
    /// Convenience constructor used by tests and demos.
    pub fn new(id: StudentId, name: impl Into<String>) -> Self {
        Student {
            id,
            name: name.into(),
            college: College::default(),
            emails: Vec::new(),
        }
    }

    /// Adds an email address, returning `self` for chaining.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.emails.push(email.into());
        self
    }

    /// Sets the college, returning `self` for chaining.
    pub fn with_college(mut self, name: impl Into<String>, address: impl Into<String>) -> Self {
        self.college = College {
            name: name.into(),
            address: address.into(),
        };
        self
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Student({}, {:?})", self.id, self.name)
    }
}

/// Result of `Register`.
///
/// `message` is omitted from JSON when empty, so a plain success serializes
/// as `{"success": true}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterResp {
    pub success: bool,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,
}

impl RegisterResp {
    pub fn ok() -> Self {
        RegisterResp {
            success: true,
            message: String::new(),
        }
    }
}

/// Request for `Query`. Unknown fields are ignored, so a full [`Student`]
/// payload also decodes as a query for its id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryReq {
    pub id: StudentId,
}
