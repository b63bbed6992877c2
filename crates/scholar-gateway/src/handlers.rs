//! Gateway HTTP handler.
//!
//! Every outcome, including an undecodable request body, is answered with
//! status 200 and a [`GatewayResponse`]; failures are reported in-band via
//! `message`.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

use crate::client::StudentRpc;
use crate::dispatch::dispatch;
use crate::schema::{GatewayRequest, GatewayResponse};
use crate::state::GatewayState;

/// `POST /gateway/student`
pub async fn student_gateway<C: StudentRpc>(
    State(state): State<GatewayState<C>>,
    payload: Result<Json<GatewayRequest>, JsonRejection>,
) -> Json<GatewayResponse> {
    let req = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            tracing::warn!("rejected gateway request: {}", rejection.body_text());
            return Json(GatewayResponse::error(format!(
                "invalid gateway request: {}",
                rejection.body_text()
            )));
        }
    };

    match dispatch(state.client(), &req.method, &req.biz_params).await {
        Ok(data) => Json(GatewayResponse::ok(data)),
        Err(err) => {
            tracing::warn!("gateway call '{}' failed: {}", req.method, err);
            Json(GatewayResponse::error(err.to_string()))
        }
    }
}
