//! Method dispatch: from `(method, biz_params)` to a typed RPC call.
//!
//! The method set is closed. Each [`Method`] arm pairs a request decoder, an
//! RPC invoker and a response encoder; there is no runtime registration.

use std::future::Future;

use serde::de::DeserializeOwned;
use serde::Serialize;

use scholar_core::{QueryReq, Student};

use crate::client::{RpcError, StudentRpc};

/// The gateway's method table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// `biz_params`: a `Student`. Result: `RegisterResp`.
    Register,
    /// `biz_params`: `{"id": ..}`. Result: `Student`.
    Query,
}

impl Method {
    pub const ALL: [Method; 2] = [Method::Register, Method::Query];

    /// Wire name of the method.
    pub fn name(self) -> &'static str {
        match self {
            Method::Register => "register",
            Method::Query => "query",
        }
    }

    pub fn from_name(name: &str) -> Option<Method> {
        Self::ALL.into_iter().find(|method| method.name() == name)
    }
}

/// Errors from dispatching one gateway request.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("unknown method '{0}'")]
    UnknownMethod(String),

    #[error("invalid biz_params for '{method}': {source}")]
    Decode {
        method: &'static str,
        source: serde_json::Error,
    },

    #[error(transparent)]
    Rpc(#[from] RpcError),

    #[error("failed to encode response: {0}")]
    Encode(serde_json::Error),
}

/// Decodes `biz_params` for `method`, calls it through `client`, and encodes
/// the typed result as JSON.
pub async fn dispatch<C: StudentRpc>(
    client: &C,
    method: &str,
    biz_params: &str,
) -> Result<serde_json::Value, DispatchError> {
    let method =
        Method::from_name(method).ok_or_else(|| DispatchError::UnknownMethod(method.to_string()))?;

    match method {
        Method::Register => {
            invoke(method, biz_params, move |student: Student| client.register(student)).await
        }
        Method::Query => invoke(method, biz_params, move |req: QueryReq| client.query(req)).await,
    }
}

async fn invoke<Req, Res, F, Fut>(
    method: Method,
    biz_params: &str,
    call: F,
) -> Result<serde_json::Value, DispatchError>
where
    Req: DeserializeOwned,
    Res: Serialize,
    F: FnOnce(Req) -> Fut,
    Fut: Future<Output = Result<Res, RpcError>>,
{
    let req: Req = serde_json::from_str(biz_params).map_err(|source| DispatchError::Decode {
        method: method.name(),
        source,
    })?;
    let res = call(req).await?;
    serde_json::to_value(res).map_err(DispatchError::Encode)
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use scholar_core::RegisterResp;
    use serde_json::json;

    use super::*;

    /// Records which operations were invoked and answers from a fixed script.
    #[derive(Default)]
    struct ScriptedRpc {
        calls: Mutex<Vec<String>>,
        fail_with: Option<&'static str>,
    }

    impl ScriptedRpc {
        fn failing(code: &'static str) -> Self {
            ScriptedRpc {
                calls: Mutex::new(Vec::new()),
                fail_with: Some(code),
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }

        fn outcome<T>(&self, ok: T) -> Result<T, RpcError> {
            match self.fail_with {
                Some(code) => Err(RpcError::Remote {
                    code: code.to_string(),
                    message: "scripted failure".to_string(),
                }),
                None => Ok(ok),
            }
        }
    }

    impl StudentRpc for ScriptedRpc {
        async fn register(&self, student: Student) -> Result<RegisterResp, RpcError> {
            self.calls.lock().unwrap().push(format!("register:{}", student.id));
            self.outcome(RegisterResp::ok())
        }

        async fn query(&self, req: QueryReq) -> Result<Student, RpcError> {
            self.calls.lock().unwrap().push(format!("query:{}", req.id));
            self.outcome(Student::new(req.id, "scripted").with_email("s@x.com"))
        }
    }

    #[test]
    fn method_names_round_trip() {
        for method in Method::ALL {
            assert_eq!(Method::from_name(method.name()), Some(method));
        }
        assert_eq!(Method::from_name("delete"), None);
        assert_eq!(Method::from_name("Register"), None);
    }

    #[tokio::test]
    async fn register_decodes_student_and_encodes_response() {
        let rpc = ScriptedRpc::default();
        let params = r#"{"id":1,"name":"student-1","college":{"name":"","address":""},"email":["s1@x.com"]}"#;

        let data = dispatch(&rpc, "register", params).await.unwrap();
        assert_eq!(data, json!({ "success": true }));
        assert_eq!(rpc.calls(), vec!["register:1"]);
    }

    #[tokio::test]
    async fn query_decodes_id_only() {
        let rpc = ScriptedRpc::default();
        let data = dispatch(&rpc, "query", r#"{"id":9,"name":"ignored"}"#).await.unwrap();
        assert_eq!(data["id"], json!(9));
        assert_eq!(data["email"], json!(["s@x.com"]));
        assert_eq!(rpc.calls(), vec!["query:9"]);
    }

    #[tokio::test]
    async fn unknown_method_never_reaches_the_client() {
        let rpc = ScriptedRpc::default();
        let err = dispatch(&rpc, "delete", r#"{"id":1}"#).await.unwrap_err();
        assert!(matches!(err, DispatchError::UnknownMethod(ref m) if m == "delete"));
        assert_eq!(err.to_string(), "unknown method 'delete'");
        assert!(rpc.calls().is_empty());
    }

    #[tokio::test]
    async fn malformed_params_are_a_decode_error() {
        let rpc = ScriptedRpc::default();

        let err = dispatch(&rpc, "register", "{not json").await.unwrap_err();
        assert!(matches!(err, DispatchError::Decode { method: "register", .. }));

        let err = dispatch(&rpc, "query", r#"{"id":"one"}"#).await.unwrap_err();
        assert!(matches!(err, DispatchError::Decode { method: "query", .. }));

        assert!(rpc.calls().is_empty());
    }

    #[tokio::test]
    async fn rpc_failures_pass_through() {
        let rpc = ScriptedRpc::failing("STORAGE_ERROR");
        let err = dispatch(&rpc, "query", r#"{"id":3}"#).await.unwrap_err();
        match err {
            DispatchError::Rpc(RpcError::Remote { code, .. }) => assert_eq!(code, "STORAGE_ERROR"),
            other => panic!("expected remote rpc error, got {:?}", other),
        }
    }
}
