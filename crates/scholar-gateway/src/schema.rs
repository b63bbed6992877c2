//! Gateway request and response envelope types.

use serde::{Deserialize, Serialize};

/// Path of the gateway endpoint.
pub const GATEWAY_PATH: &str = "/gateway/student";

/// `message` value of a successful response.
pub const OK_MESSAGE: &str = "ok";

/// Inbound gateway request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayRequest {
    /// Name of the operation to call (`"register"` or `"query"`).
    pub method: String,
    /// JSON-encoded request for the operation, as a string.
    pub biz_params: String,
}

/// Uniform gateway response envelope.
///
/// `message` is [`OK_MESSAGE`] on success and a diagnostic otherwise.
/// `data` is present only on success.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GatewayResponse {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl GatewayResponse {
    pub fn ok(data: serde_json::Value) -> Self {
        GatewayResponse {
            message: OK_MESSAGE.to_string(),
            data: Some(data),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        GatewayResponse {
            message: message.into(),
            data: None,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.message == OK_MESSAGE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn error_envelope_has_no_data_field() {
        let value = serde_json::to_value(GatewayResponse::error("unknown method 'delete'")).unwrap();
        assert_eq!(value, json!({ "message": "unknown method 'delete'" }));
    }

    #[test]
    fn ok_envelope_carries_data() {
        let resp = GatewayResponse::ok(json!({ "success": true }));
        assert!(resp.is_ok());
        assert_eq!(
            serde_json::to_value(resp).unwrap(),
            json!({ "message": "ok", "data": { "success": true } })
        );
    }
}
