//! Test event log — records appended events for later inspection.

use std::sync::Mutex;

use chrono::{DateTime, TimeDelta, Utc};
use tracker_core::clock::Clock;
use tracker_core::event::PurchaseEvent;
use tracker_core::log::{EventLog, LogStats};

/// An event log that keeps every appended event and the arguments of every
/// `stats` call. `stats` answers with the configured counts, stamped with
/// the clock's current time.
#[derive(Debug, Default)]
pub struct RecordingEventLog {
    appended: Mutex<Vec<PurchaseEvent>>,
    stats_calls: Mutex<Vec<(TimeDelta, DateTime<Utc>)>>,
    stats_result: LogStats,
}

impl RecordingEventLog {
    /// Create a recording log whose `stats` always returns zero counts.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a recording log whose `stats` always returns these counts.
    #[must_use]
    pub fn with_counts(total: u64, recent: u64) -> Self {
        Self {
            stats_result: LogStats {
                total,
                recent,
                ..LogStats::default()
            },
            ..Self::default()
        }
    }

    /// Returns a snapshot of all appended events.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn appended_events(&self) -> Vec<PurchaseEvent> {
        self.appended.lock().unwrap().clone()
    }

    /// Returns the `(window, as_of)` pairs of every `stats` call.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn stats_calls(&self) -> Vec<(TimeDelta, DateTime<Utc>)> {
        self.stats_calls.lock().unwrap().clone()
    }
}

impl EventLog for RecordingEventLog {
    fn append(&self, event: PurchaseEvent) -> u64 {
        let mut appended = self.appended.lock().unwrap();
        appended.push(event);
        appended.len() as u64
    }

    fn stats(&self, window: TimeDelta, clock: &dyn Clock) -> LogStats {
        let as_of = clock.now();
        self.stats_calls.lock().unwrap().push((window, as_of));
        LogStats {
            as_of,
            ..self.stats_result
        }
    }
}
