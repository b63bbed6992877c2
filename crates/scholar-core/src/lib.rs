//! Shared types for the scholar student-record system.
//!
//! Both the record service and the gateway speak in terms of these types:
//! [`Student`] and its embedded [`College`], the request/response shapes of
//! the two RPC operations, and the route and error-body definitions of the
//! RPC transport.
//!
//! # Modules
//!
//! - [`student`]: Student, College, RegisterResp, QueryReq
//! - [`rpc`]: RPC route paths, service name and error wire format

pub mod rpc;
pub mod student;

pub use rpc::{RpcErrorBody, RpcErrorDetail};
pub use student::{College, QueryReq, RegisterResp, Student, StudentId};
