//! `Register` and `Query` RPC handlers.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

use scholar_core::{QueryReq, RegisterResp, Student};

use crate::error::ApiError;
use crate::service::{run_blocking, Lookup};
use crate::state::AppState;

/// `POST /rpc/student/register`
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<Student>, JsonRejection>,
) -> Result<Json<RegisterResp>, ApiError> {
    let Json(student) = payload?;
    let resp = run_blocking(&state.service, move |service| service.register(student))
        .await
        .map_err(|err| {
            tracing::error!("register failed: {}", err);
            ApiError::from(err)
        })?;
    Ok(Json(resp))
}

/// `POST /rpc/student/query`
pub async fn query(
    State(state): State<AppState>,
    payload: Result<Json<QueryReq>, JsonRejection>,
) -> Result<Json<Student>, ApiError> {
    let Json(req) = payload?;
    let id = req.id;
    match run_blocking(&state.service, move |service| service.query(id)).await? {
        Lookup::Found(student) => Ok(Json(student)),
        Lookup::NotFound => Err(ApiError::NotFound(format!("student {} not found", id))),
    }
}
