//! Binary entrypoint for the scholar gateway.
//!
//! Configuration comes from flags or environment variables (see
//! [`GatewayArgs`]); `RUST_LOG` controls log verbosity.

use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use scholar_gateway::config::GatewayArgs;
use scholar_gateway::router::build_router;
use scholar_gateway::state::GatewayState;
use scholar_gateway::{HttpStudentClient, LocalStudentClient, StaticRegistry, StudentRpc};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = GatewayArgs::parse();

    let listener = match TcpListener::bind(&args.bind).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!("failed to bind {}: {}", args.bind, err);
            std::process::exit(1);
        }
    };

    if args.embedded {
        tracing::info!("scholar-gateway listening on {} (embedded service)", args.bind);
        serve(listener, LocalStudentClient::in_memory()).await;
        return;
    }

    let registry = match StaticRegistry::parse(&args.registry) {
        Ok(registry) => registry,
        Err(err) => {
            tracing::error!("invalid registry configuration: {}", err);
            std::process::exit(1);
        }
    };
    if !registry.services().contains(&args.service_name.as_str()) {
        tracing::warn!(
            "service '{}' is not in the registry; every call will fail",
            args.service_name
        );
    }

    let client = match HttpStudentClient::new(Arc::new(registry), &args.service_name, args.rpc_timeout()) {
        Ok(client) => client,
        Err(err) => {
            tracing::error!("failed to build rpc client: {}", err);
            std::process::exit(1);
        }
    };

    tracing::info!(
        "scholar-gateway listening on {} (service '{}')",
        args.bind,
        args.service_name
    );
    serve(listener, client).await;
}

async fn serve<C: StudentRpc>(listener: TcpListener, client: C) {
    let app = build_router(GatewayState::new(client));
    if let Err(err) = axum::serve(listener, app).await {
        tracing::error!("server error: {}", err);
        std::process::exit(1);
    }
}
