//! Student record service and its RPC server.
//!
//! [`service::StudentService`] implements `Register` and `Query` on top of a
//! [`cache::RecordCache`] and a [`scholar_storage::StudentStore`]. The
//! [`router`] exposes both operations as JSON-over-HTTP RPC routes.

pub mod cache;
pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod service;
pub mod state;

pub use cache::RecordCache;
pub use error::{ApiError, ServiceError};
pub use service::{run_blocking, Lookup, ServiceConfig, StudentService};
