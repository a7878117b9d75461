//! Integration tests for the health, root and fallback endpoints.

mod common;

use axum::http::StatusCode;

#[tokio::test]
async fn test_health_returns_200_with_status_healthy() {
    let app = common::build_test_app();

    let (status, json) = common::get_json(app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert!(json["version"].is_string());
    assert_eq!(json["timestamp"], "2026-01-15T10:00:00Z");
    assert_eq!(json["uptime_seconds"], 0.0);
}

#[tokio::test]
async fn test_root_lists_endpoints() {
    let app = common::build_test_app();

    let (status, json) = common::get_json(app, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "Purchase Tracker API");
    assert!(json["endpoints"]["POST /buy"].is_string());
    assert!(json["endpoints"]["GET /stats"].is_string());
}

#[tokio::test]
async fn test_unknown_route_returns_404_with_available_endpoints() {
    let app = common::build_test_app();

    let (status, json) = common::get_json(app, "/api/v1/nonexistent").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "not_found");
    assert_eq!(
        json["message"],
        "The requested path '/api/v1/nonexistent' was not found"
    );
    assert_eq!(
        json["available_endpoints"],
        serde_json::json!(["/", "/buy", "/stats", "/health"])
    );
}
