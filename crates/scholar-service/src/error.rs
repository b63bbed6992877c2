//! Service and RPC error types.
//!
//! [`ServiceError`] is what [`StudentService`](crate::service::StudentService)
//! returns; store failures pass through it unchanged. [`ApiError`] is the
//! RPC-facing error: it implements `axum::response::IntoResponse` to produce
//! an [`RpcErrorBody`] with the matching HTTP status code.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use scholar_core::rpc::{CODE_BAD_REQUEST, CODE_INTERNAL, CODE_NOT_FOUND, CODE_STORAGE_ERROR};
use scholar_core::RpcErrorBody;
use scholar_storage::StorageError;

/// Errors produced by record service operations.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// The backing store failed. Surfaced to the caller as-is.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// The blocking task running the operation panicked or was cancelled.
    #[error("blocking task failed: {0}")]
    Blocking(#[from] tokio::task::JoinError),
}

/// RPC errors with HTTP status code mapping.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// No record for the requested id (404).
    #[error("not found: {0}")]
    NotFound(String),

    /// Undecodable request body (400).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Backing-store failure (500).
    #[error("storage error: {0}")]
    Storage(String),

    /// Any other server-side failure (500).
    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, CODE_NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, CODE_BAD_REQUEST, msg),
            ApiError::Storage(msg) => (StatusCode::INTERNAL_SERVER_ERROR, CODE_STORAGE_ERROR, msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, CODE_INTERNAL, msg),
        };

        (status, axum::Json(RpcErrorBody::new(code, message))).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Storage(inner) => ApiError::Storage(inner.to_string()),
            ServiceError::Blocking(inner) => ApiError::Internal(inner.to_string()),
        }
    }
}

impl From<axum::extract::rejection::JsonRejection> for ApiError {
    fn from(rejection: axum::extract::rejection::JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}
