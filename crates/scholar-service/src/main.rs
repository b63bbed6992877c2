//! Binary entrypoint for the student record RPC service.
//!
//! Configuration comes from flags or environment variables (see
//! [`ServiceArgs`]); `RUST_LOG` controls log verbosity.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use scholar_service::config::ServiceArgs;
use scholar_service::router::build_router;
use scholar_service::state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = ServiceArgs::parse();

    let state = match AppState::from_args(&args) {
        Ok(state) => state,
        Err(err) => {
            tracing::error!("failed to open store: {}", err);
            std::process::exit(1);
        }
    };

    let listener = match tokio::net::TcpListener::bind(&args.bind).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!("failed to bind {}: {}", args.bind, err);
            std::process::exit(1);
        }
    };

    if args.in_memory {
        tracing::info!("scholar-service listening on {} (in-memory store)", args.bind);
    } else {
        tracing::info!("scholar-service listening on {} (db={})", args.bind, args.db_path);
    }

    if let Err(err) = axum::serve(listener, build_router(state)).await {
        tracing::error!("server error: {}", err);
        std::process::exit(1);
    }
}
