//! Shared application state.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracker_core::clock::Clock;
use tracker_core::log::EventLog;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Source of "now" for receive times, stats windows and uptime.
    pub clock: Arc<dyn Clock>,
    /// The purchase event log; one instance for the whole process.
    pub event_log: Arc<dyn EventLog>,
    /// When the server started.
    pub started_at: DateTime<Utc>,
}

impl AppState {
    /// Create new application state. The start time is read from `clock`.
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>, event_log: Arc<dyn EventLog>) -> Self {
        let started_at = clock.now();
        Self {
            clock,
            event_log,
            started_at,
        }
    }

    /// Seconds since the server started, never negative.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn uptime_seconds(&self) -> f64 {
        let elapsed = self.clock.elapsed_since(self.started_at);
        elapsed.num_milliseconds().max(0) as f64 / 1000.0
    }
}
