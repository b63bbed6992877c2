//! Router assembly for the gateway.

use axum::routing::post;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::client::StudentRpc;
use crate::handlers;
use crate::schema::GATEWAY_PATH;
use crate::state::GatewayState;

/// Builds the gateway router for any RPC client implementation.
pub fn build_router<C: StudentRpc>(state: GatewayState<C>) -> Router {
    Router::new()
        .route(GATEWAY_PATH, post(handlers::student_gateway::<C>))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
