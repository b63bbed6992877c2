//! Integration tests for the record service RPC routes.
//!
//! Tests use `tower::ServiceExt::oneshot` to send requests directly to the
//! router without starting a network server.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::json;
use tower::ServiceExt;

use scholar_core::rpc::{QUERY_PATH, REGISTER_PATH};
use scholar_core::StudentId;
use scholar_service::router::build_router;
use scholar_service::state::AppState;
use scholar_service::ServiceConfig;
use scholar_storage::{InsertOutcome, SqliteStore, StorageError, StudentStore, UserRow};

// ---------------------------------------------------------------------------
// Test helpers
// ---------------------------------------------------------------------------

fn test_app() -> Router {
    build_router(AppState::in_memory())
}

async fn post_raw(app: &Router, path: &str, body: Vec<u8>) -> (StatusCode, serde_json::Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(path)
                .header("content-type", "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap_or(json!(null));
    (status, json)
}

async fn post_json(app: &Router, path: &str, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
    post_raw(app, path, serde_json::to_vec(&body).unwrap()).await
}

/// A store whose every call fails.
struct FailingStore;

impl StudentStore for FailingStore {
    fn create_user(&self, _user: &UserRow) -> Result<InsertOutcome, StorageError> {
        Err(StorageError::LockPoisoned)
    }

    fn query_user(&self, _id: StudentId) -> Result<Option<UserRow>, StorageError> {
        Err(StorageError::LockPoisoned)
    }
}

fn student_json(id: i32) -> serde_json::Value {
    json!({
        "id": id,
        "name": format!("student-{}", id),
        "college": { "name": "", "address": "" },
        "email": [format!("student-{}@pku.com", id)]
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[tokio::test]
async fn register_then_query() {
    let app = test_app();

    let (status, body) = post_json(&app, REGISTER_PATH, student_json(1)).await;
    assert_eq!(status, StatusCode::OK, "register failed: {:?}", body);
    assert_eq!(body, json!({ "success": true }));

    let (status, body) = post_json(&app, QUERY_PATH, json!({ "id": 1 })).await;
    assert_eq!(status, StatusCode::OK, "query failed: {:?}", body);
    assert_eq!(body, student_json(1));
}

#[tokio::test]
async fn query_unknown_id_is_not_found() {
    let app = test_app();

    let (status, body) = post_json(&app, QUERY_PATH, json!({ "id": 404 })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["error"]["code"], json!("NOT_FOUND"));
}

#[tokio::test]
async fn malformed_body_is_bad_request() {
    let app = test_app();

    let (status, body) = post_raw(&app, REGISTER_PATH, b"{not json".to_vec()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], json!("BAD_REQUEST"));

    let (status, body) = post_json(&app, QUERY_PATH, json!({ "id": "one" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], json!("BAD_REQUEST"));
}

#[tokio::test]
async fn duplicate_register_succeeds_and_keeps_first() {
    let app = test_app();

    post_json(&app, REGISTER_PATH, student_json(2)).await;
    let mut other = student_json(2);
    other["name"] = json!("someone-else");
    let (status, body) = post_json(&app, REGISTER_PATH, other).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));

    let (_, body) = post_json(&app, QUERY_PATH, json!({ "id": 2 })).await;
    assert_eq!(body["name"], json!("student-2"));
}

#[tokio::test]
async fn sqlite_backed_state_serves_records() {
    let store = Arc::new(SqliteStore::in_memory().unwrap());
    let app = build_router(AppState::with_store(store, ServiceConfig::default()));

    for id in 1..=20 {
        let (status, _) = post_json(&app, REGISTER_PATH, student_json(id)).await;
        assert_eq!(status, StatusCode::OK);
    }
    for id in 1..=20 {
        let (status, body) = post_json(&app, QUERY_PATH, json!({ "id": id })).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, student_json(id));
    }
}

#[tokio::test]
async fn store_failure_is_a_storage_error() {
    let app = build_router(AppState::with_store(Arc::new(FailingStore), ServiceConfig::default()));

    let (status, body) = post_json(&app, QUERY_PATH, json!({ "id": 1 })).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["error"]["code"], json!("STORAGE_ERROR"));

    let (status, body) = post_json(&app, REGISTER_PATH, student_json(1)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["code"], json!("STORAGE_ERROR"));
}
