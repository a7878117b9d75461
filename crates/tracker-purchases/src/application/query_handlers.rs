//! Query handlers for the purchases context.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracker_core::clock::Clock;
use tracker_core::error::DomainError;
use tracker_core::log::EventLog;
use tracker_core::window::StatsWindow;

/// Read-only view of the purchase counters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PurchaseStatsView {
    /// Purchases recorded since startup.
    pub total_purchases: u64,
    /// Purchases whose event time lies within the window.
    pub recent_purchases: u64,
    /// The window that was applied, in hours.
    pub timeframe_hours: f64,
    /// The instant the window ends at.
    pub generated_at: DateTime<Utc>,
}

/// Computes total and windowed purchase counts. The log reads `clock` while
/// it holds its snapshot; `generated_at` is that reading.
///
/// # Errors
///
/// Returns `DomainError::WindowOutOfRange` if `timeframe_hours` is outside
/// the supported range.
pub fn get_purchase_stats(
    timeframe_hours: f64,
    clock: &dyn Clock,
    log: &dyn EventLog,
) -> Result<PurchaseStatsView, DomainError> {
    let window = StatsWindow::from_hours(timeframe_hours)?;
    let stats = log.stats(window.duration(), clock);

    Ok(PurchaseStatsView {
        total_purchases: stats.total,
        recent_purchases: stats.recent,
        timeframe_hours: window.hours(),
        generated_at: stats.as_of,
    })
}
