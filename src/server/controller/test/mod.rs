//! Request-level tests driving the full router with `tower::ServiceExt::oneshot`.

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, context::TestContext, factory};
use tower::ServiceExt;

use crate::server::{router, state::AppState};


/// Builds a context with every table created.
async fn setup() -> TestContext {
    TestBuilder::new()
        .with_favorite_tables()
        .build()
        .await
        .unwrap()
}

fn app(db: &DatabaseConnection) -> Router {
    router::router(AppState::new(db.clone()))
}

/// Sends a request through a fresh router and returns the status and parsed JSON body.
///
/// An empty body is returned as `Value::Null`.
async fn send(
    db: &DatabaseConnection,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    send_request(db, request).await
}

async fn send_request(db: &DatabaseConnection, request: Request<Body>) -> (StatusCode, Value) {
    let response = app(db).oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    if bytes.is_empty() {
        return (status, Value::Null);
    }

    (status, serde_json::from_slice(&bytes).unwrap())
}
