//! Route modules and the fallback handler.

use axum::Json;
use axum::http::{StatusCode, Uri};
use axum::response::IntoResponse;
use serde::Serialize;

pub mod health;
pub mod index;
pub mod purchases;

/// Paths listed in the root document and in 404 responses.
pub const AVAILABLE_ENDPOINTS: [&str; 4] = ["/", "/buy", "/stats", "/health"];

/// JSON body for unknown paths.
#[derive(Debug, Serialize)]
pub struct NotFoundBody {
    /// Machine-readable error code.
    pub error: &'static str,
    /// Human-readable error message.
    pub message: String,
    /// Paths that do exist.
    pub available_endpoints: &'static [&'static str],
}

/// Fallback for every path no router matched.
pub async fn not_found(uri: Uri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(NotFoundBody {
            error: "not_found",
            message: format!("The requested path '{}' was not found", uri.path()),
            available_endpoints: &AVAILABLE_ENDPOINTS,
        }),
    )
}
