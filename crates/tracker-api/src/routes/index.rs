//! Root endpoint describing the service.

use std::collections::BTreeMap;

use axum::{Json, Router, routing::get};
use serde::Serialize;

use crate::state::AppState;

/// Root document.
#[derive(Serialize)]
pub struct IndexResponse {
    /// Service name.
    pub message: &'static str,
    /// Service version.
    pub version: &'static str,
    /// Route → description.
    pub endpoints: BTreeMap<&'static str, &'static str>,
}

/// GET /
async fn index() -> Json<IndexResponse> {
    Json(IndexResponse {
        message: "Purchase Tracker API",
        version: env!("CARGO_PKG_VERSION"),
        endpoints: BTreeMap::from([
            ("POST /buy", "Log a purchase"),
            ("GET /stats", "Get purchase statistics"),
            ("GET /health", "Health check"),
        ]),
    })
}

/// Returns the root router.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(index))
}
