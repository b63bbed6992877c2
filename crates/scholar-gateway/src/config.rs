//! Command-line and environment configuration for the gateway binary.

use std::time::Duration;

use clap::Parser;

use scholar_core::rpc::DEFAULT_SERVICE_NAME;

/// HTTP gateway for the student record service.
#[derive(Debug, Clone, Parser)]
#[command(name = "scholar-gateway", about = "HTTP gateway for the student record service")]
pub struct GatewayArgs {
    /// Address the gateway listens on.
    #[arg(long, env = "SCHOLAR_GATEWAY_ADDR", default_value = "0.0.0.0:8888")]
    pub bind: String,

    /// Logical name of the record service in the registry.
    #[arg(long, env = "SCHOLAR_SERVICE_NAME", default_value = DEFAULT_SERVICE_NAME)]
    pub service_name: String,

    /// Registry entries, `name=url[|url...]`, comma-separated.
    #[arg(
        long,
        env = "SCHOLAR_REGISTRY",
        value_delimiter = ',',
        default_value = "scholar-student=http://127.0.0.1:9999"
    )]
    pub registry: Vec<String>,

    /// Per-call RPC timeout in milliseconds.
    #[arg(long, env = "SCHOLAR_RPC_TIMEOUT_MS", default_value_t = 3000)]
    pub rpc_timeout_ms: u64,

    /// Serve from an in-process service with an in-memory store instead of
    /// calling a remote one.
    #[arg(long)]
    pub embedded: bool,
}

impl GatewayArgs {
    pub fn rpc_timeout(&self) -> Duration {
        Duration::from_millis(self.rpc_timeout_ms)
    }
}
