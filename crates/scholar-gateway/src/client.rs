//! Clients for the record service RPC surface.
//!
//! [`StudentRpc`] is the seam between the dispatcher and the transport.
//! [`HttpStudentClient`] resolves the service through a [`Registry`] and
//! posts JSON to its RPC routes; [`LocalStudentClient`] calls an in-process
//! [`StudentService`].

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;

use scholar_core::rpc::{CODE_INTERNAL, CODE_NOT_FOUND, CODE_STORAGE_ERROR, QUERY_PATH, REGISTER_PATH};
use scholar_core::{QueryReq, RegisterResp, RpcErrorBody, Student};
use scholar_service::{run_blocking, Lookup, RecordCache, ServiceError, StudentService};
use scholar_storage::InMemoryStore;

use crate::registry::{Registry, RegistryError};

/// Errors from an RPC call.
#[derive(Debug, thiserror::Error)]
pub enum RpcError {
    /// The service has no record for the requested id.
    #[error("{0}")]
    NotFound(String),

    /// The service answered with an error.
    #[error("rpc call failed ({code}): {message}")]
    Remote { code: String, message: String },

    /// The request could not be sent or the response not read.
    #[error("rpc transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service name could not be resolved to an endpoint.
    #[error("service resolution failed: {0}")]
    Resolve(#[from] RegistryError),
}

impl From<ServiceError> for RpcError {
    fn from(err: ServiceError) -> Self {
        let code = match err {
            ServiceError::Storage(_) => CODE_STORAGE_ERROR,
            ServiceError::Blocking(_) => CODE_INTERNAL,
        };
        RpcError::Remote {
            code: code.to_string(),
            message: err.to_string(),
        }
    }
}

fn not_found(id: i32) -> RpcError {
    RpcError::NotFound(format!("student {} not found", id))
}

/// The record service's RPC surface as seen by the gateway.
pub trait StudentRpc: Send + Sync + 'static {
    fn register(
        &self,
        student: Student,
    ) -> impl Future<Output = Result<RegisterResp, RpcError>> + Send;

    fn query(&self, req: QueryReq) -> impl Future<Output = Result<Student, RpcError>> + Send;
}

/// Calls the record service over HTTP.
///
/// The endpoint is resolved per call, so registry changes take effect
/// without rebuilding the client. Every request is bounded by the client
/// timeout.
pub struct HttpStudentClient {
    http: reqwest::Client,
    registry: Arc<dyn Registry>,
    service_name: String,
}

impl HttpStudentClient {
    pub fn new(
        registry: Arc<dyn Registry>,
        service_name: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, RpcError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(HttpStudentClient {
            http,
            registry,
            service_name: service_name.into(),
        })
    }

    async fn call<Req, Res>(&self, path: &str, body: &Req) -> Result<Res, RpcError>
    where
        Req: Serialize + Sync,
        Res: DeserializeOwned,
    {
        let endpoint = self.registry.resolve(&self.service_name)?;
        let url = format!("{}{}", endpoint.trim_end_matches('/'), path);

        let response = self.http.post(&url).json(body).send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response.json::<Res>().await?);
        }

        let text = response.text().await?;
        match serde_json::from_str::<RpcErrorBody>(&text) {
            Ok(body) if body.error.code == CODE_NOT_FOUND => Err(RpcError::NotFound(body.error.message)),
            Ok(body) => Err(RpcError::Remote {
                code: body.error.code,
                message: body.error.message,
            }),
            Err(_) => Err(RpcError::Remote {
                code: status.as_u16().to_string(),
                message: text,
            }),
        }
    }
}

impl StudentRpc for HttpStudentClient {
    async fn register(&self, student: Student) -> Result<RegisterResp, RpcError> {
        self.call(REGISTER_PATH, &student).await
    }

    async fn query(&self, req: QueryReq) -> Result<Student, RpcError> {
        self.call(QUERY_PATH, &req).await
    }
}

/// Calls a [`StudentService`] in the same process.
#[derive(Clone)]
pub struct LocalStudentClient {
    service: Arc<StudentService>,
}

impl LocalStudentClient {
    pub fn new(service: Arc<StudentService>) -> Self {
        LocalStudentClient { service }
    }

    /// A client over a fresh service backed by an in-memory store.
    pub fn in_memory() -> Self {
        let service = StudentService::new(Arc::new(InMemoryStore::new()), Arc::new(RecordCache::new()));
        Self::new(Arc::new(service))
    }

    pub fn service(&self) -> &Arc<StudentService> {
        &self.service
    }
}

impl StudentRpc for LocalStudentClient {
    async fn register(&self, student: Student) -> Result<RegisterResp, RpcError> {
        Ok(run_blocking(&self.service, move |service| service.register(student)).await?)
    }

    async fn query(&self, req: QueryReq) -> Result<Student, RpcError> {
        let id = req.id;
        match run_blocking(&self.service, move |service| service.query(id)).await? {
            Lookup::Found(student) => Ok(student),
            Lookup::NotFound => Err(not_found(id)),
        }
    }
}
