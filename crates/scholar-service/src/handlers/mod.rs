//! RPC handler modules.
//!
//! Handlers decode the request body, delegate to
//! [`StudentService`](crate::service::StudentService), and return JSON. No
//! business logic lives in handlers.

pub mod student;
