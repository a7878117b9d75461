//! Purchase Tracker API server entry point.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use tracker_api::config::ServerConfig;
use tracker_api::error::AppError;
use tracker_api::routes;
use tracker_api::state::AppState;
use tracker_core::clock::SystemClock;
use tracker_event_store::InMemoryEventLog;

fn main() -> Result<(), AppError> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    let config = ServerConfig::from_env()?;

    let mut runtime = tokio::runtime::Builder::new_multi_thread();
    if let Some(workers) = config.workers {
        runtime.worker_threads(workers);
    }
    let runtime = runtime.enable_all().build()?;

    runtime.block_on(serve(config))
}

async fn serve(config: ServerConfig) -> Result<(), AppError> {
    tracing::info!(workers = ?config.workers, "Starting Purchase Tracker API server");

    // One log for the whole process, shared by every worker thread.
    let app_state = AppState::new(Arc::new(SystemClock), Arc::new(InMemoryEventLog::new()));

    // TODO: Replace CorsLayer::permissive() with restricted origins for production.
    let app = Router::new()
        .merge(routes::index::router())
        .merge(routes::health::router())
        .merge(routes::purchases::router())
        .fallback(routes::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    let addr: SocketAddr = config
        .bind_address()
        .parse()
        .map_err(|e| AppError::Config(format!("invalid HOST:PORT combination: {e}")))?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
