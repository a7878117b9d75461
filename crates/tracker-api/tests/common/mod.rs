//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;
use tracker_core::clock::Clock;
use tracker_event_store::InMemoryEventLog;
use tracker_test_support::FixedClock;

use tracker_api::routes;
use tracker_api::state::AppState;

/// Fixed timestamp used across all integration tests.
pub fn fixed_clock() -> FixedClock {
    FixedClock::reference()
}

/// Build the full app router with a fresh `InMemoryEventLog` and a fixed
/// clock. Uses the same route structure as `main.rs`.
pub fn build_test_app() -> Router {
    build_test_app_with_log(Arc::new(InMemoryEventLog::new()))
}

/// Build the full app router around an existing log, so several requests can
/// share state.
pub fn build_test_app_with_log(event_log: Arc<InMemoryEventLog>) -> Router {
    let clock: Arc<dyn Clock> = Arc::new(fixed_clock());
    let app_state = AppState::new(clock, event_log);

    Router::new()
        .merge(routes::index::router())
        .merge(routes::health::router())
        .merge(routes::purchases::router())
        .fallback(routes::not_found)
        .with_state(app_state)
}

/// Send a POST request with a JSON body and extra headers and return the
/// response.
pub async fn post_json_with_headers(
    app: Router,
    uri: &str,
    body: &serde_json::Value,
    headers: &[(&str, &str)],
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json");
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    let request = builder
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap();

    send(app, request).await
}

/// Send a POST request with a JSON body and return the response.
pub async fn post_json(
    app: Router,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    post_json_with_headers(app, uri, body, &[]).await
}

/// Send a GET request and return the response.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    send(app, request).await
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

/// A valid purchase body.
pub fn buy_body(user_id: i64, quantity: i64) -> serde_json::Value {
    serde_json::json!({
        "user_id": user_id,
        "promotion_id": 10,
        "product_id": 20,
        "product_quantity": quantity
    })
}
