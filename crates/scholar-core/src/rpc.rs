//! RPC transport definitions shared by the record service and its clients.
//!
//! The service is reached as JSON over HTTP. Successful calls return the
//! operation's response type as the body; failures return an
//! [`RpcErrorBody`] with a machine-readable code.

use serde::{Deserialize, Serialize};

/// Logical name the record service is registered under.
pub const DEFAULT_SERVICE_NAME: &str = "scholar-student";

/// Route for `Register(Student) -> RegisterResp`.
pub const REGISTER_PATH: &str = "/rpc/student/register";
/// Route for `Query(QueryReq) -> Student`.
pub const QUERY_PATH: &str = "/rpc/student/query";

/// Error code for a query that matched no record.
pub const CODE_NOT_FOUND: &str = "NOT_FOUND";
/// Error code for an undecodable request body.
pub const CODE_BAD_REQUEST: &str = "BAD_REQUEST";
/// Error code for a backing-store failure.
pub const CODE_STORAGE_ERROR: &str = "STORAGE_ERROR";
/// Error code for a server-side failure outside the store.
pub const CODE_INTERNAL: &str = "INTERNAL_ERROR";

/// Structured error detail in RPC error responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpcErrorDetail {
    /// Machine-readable error code (e.g., "NOT_FOUND").
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

/// Body of every failed RPC call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpcErrorBody {
    /// Always `false`.
    pub success: bool,
    pub error: RpcErrorDetail,
}

impl RpcErrorBody {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        RpcErrorBody {
            success: false,
            error: RpcErrorDetail {
                code: code.into(),
                message: message.into(),
            },
        }
    }
}
