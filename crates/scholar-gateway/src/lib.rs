//! HTTP gateway for the student record service.
//!
//! The gateway exposes one endpoint that accepts `{method, biz_params}` and
//! answers with a `{message, data}` envelope. [`dispatch`] maps the method
//! name to a typed RPC call through a closed method table; [`client`]
//! carries the call to the record service, either over HTTP (endpoints
//! found through a [`registry::Registry`]) or in-process.

pub mod client;
pub mod config;
pub mod dispatch;
pub mod handlers;
pub mod registry;
pub mod router;
pub mod schema;
pub mod state;

pub use client::{HttpStudentClient, LocalStudentClient, RpcError, StudentRpc};
pub use dispatch::{dispatch, DispatchError, Method};
pub use registry::{Registry, RegistryError, StaticRegistry};
pub use schema::{GatewayRequest, GatewayResponse};
