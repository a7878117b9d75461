//! Routes for the purchases bounded context.

use std::net::SocketAddr;

use axum::extract::connect_info::ConnectInfo;
use axum::extract::{Query, State};
use axum::http::{Extensions, HeaderMap};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;

use tracker_core::window::DEFAULT_WINDOW_HOURS;
use tracker_purchases::application::{command_handlers, query_handlers};
use tracker_purchases::domain::commands;
use tracker_purchases::domain::signals::Signals;
use tracker_purchases::domain::timestamp;

use crate::client_ip::extract_client_ip;
use crate::error::ApiError;
use crate::state::AppState;
use crate::uptime::format_uptime;

/// Request body for POST /buy.
#[derive(Debug, Deserialize)]
pub struct BuyRequest {
    /// The acting user.
    pub user_id: i64,
    /// The promotion the purchase was made under.
    pub promotion_id: i64,
    /// The purchased product.
    pub product_id: i64,
    /// Units purchased.
    #[serde(alias = "quantity")]
    pub product_quantity: i64,
}

/// Response body for POST /buy.
#[derive(Debug, Serialize)]
pub struct BuyResponse {
    /// Always `true`; failures use the error body instead.
    pub success: bool,
    /// Total purchases after this one.
    pub buy_count: u64,
    /// Human-readable confirmation.
    pub message: String,
    /// The resolved event time.
    pub occurred_at: DateTime<Utc>,
}

/// Query parameters for GET /stats.
#[derive(Debug, Deserialize)]
pub struct StatsParams {
    /// Window for the recent count, in hours.
    #[serde(default = "default_timeframe_hours")]
    pub timeframe_hours: f64,
}

fn default_timeframe_hours() -> f64 {
    DEFAULT_WINDOW_HOURS
}

/// Response body for GET /stats.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    /// Seconds since startup.
    pub uptime_seconds: f64,
    /// Uptime as `1h 2m 3s`.
    pub uptime_formatted: String,
    /// Purchases recorded since startup.
    pub total_buys: u64,
    /// Server time the window ends at.
    pub current_time: DateTime<Utc>,
    /// Always `"healthy"` when the server answers.
    pub server_status: &'static str,
    /// Purchases inside the window.
    pub n_recent_buys: u64,
    /// The window that was applied, in hours.
    pub timeframe_hours: f64,
}

/// Collects the timing headers the resolver knows about.
fn timing_signals(headers: &HeaderMap) -> Signals {
    headers
        .iter()
        .filter(|(name, _)| timestamp::is_known_signal(name.as_str()))
        .filter_map(|(name, value)| Some((name.as_str(), value.to_str().ok()?)))
        .collect()
}

/// POST /buy
#[instrument(
    skip(state, headers, extensions, request),
    fields(user_id = request.user_id, product_id = request.product_id)
)]
async fn log_buy(
    State(state): State<AppState>,
    headers: HeaderMap,
    extensions: Extensions,
    Json(request): Json<BuyRequest>,
) -> Result<Json<BuyResponse>, ApiError> {
    let received_at = state.clock.now();
    let peer = extensions
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| *addr);

    let command = commands::RecordPurchase {
        correlation_id: Uuid::new_v4(),
        user_id: request.user_id,
        promotion_id: request.promotion_id,
        product_id: request.product_id,
        quantity: request.product_quantity,
        origin_address: extract_client_ip(&headers, peer),
        signals: timing_signals(&headers),
        received_at,
    };

    info!(correlation_id = %command.correlation_id, "handling record_purchase command");

    let recorded = command_handlers::handle_record_purchase(&command, &*state.event_log)?;

    Ok(Json(BuyResponse {
        success: true,
        buy_count: recorded.total_purchases,
        message: format!(
            "Buy logged successfully. Total buys: {}",
            recorded.total_purchases
        ),
        occurred_at: recorded.occurred_at,
    }))
}

/// GET /stats
#[instrument(skip(state))]
async fn get_stats(
    State(state): State<AppState>,
    Query(params): Query<StatsParams>,
) -> Result<Json<StatsResponse>, ApiError> {
    let view = query_handlers::get_purchase_stats(
        params.timeframe_hours,
        state.clock.as_ref(),
        &*state.event_log,
    )?;
    let uptime_seconds = state.uptime_seconds();

    Ok(Json(StatsResponse {
        uptime_seconds,
        uptime_formatted: format_uptime(uptime_seconds),
        total_buys: view.total_purchases,
        current_time: view.generated_at,
        server_status: "healthy",
        n_recent_buys: view.recent_purchases,
        timeframe_hours: view.timeframe_hours,
    }))
}

/// Returns the router for the purchases context.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/buy", post(log_buy))
        .route("/stats", get(get_stats))
}
