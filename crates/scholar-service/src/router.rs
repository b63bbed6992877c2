//! Router assembly for the record service RPC surface.

use axum::routing::post;
use axum::Router;
use tower_http::trace::TraceLayer;

use scholar_core::rpc::{QUERY_PATH, REGISTER_PATH};

use crate::handlers;
use crate::state::AppState;

/// Builds the axum router with both RPC routes.
///
/// TraceLayer provides request-level logging via tracing.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(REGISTER_PATH, post(handlers::student::register))
        .route(QUERY_PATH, post(handlers::student::query))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
