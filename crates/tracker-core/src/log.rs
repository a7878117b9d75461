//! Event log abstraction.

use chrono::{DateTime, TimeDelta, Utc};
use serde::Serialize;

use crate::clock::Clock;
use crate::event::PurchaseEvent;

/// Counts produced by a single consistent read of the log.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LogStats {
    /// Number of events ever appended.
    pub total: u64,
    /// Number of events whose `occurred_at` lies in `[as_of - window, as_of]`.
    pub recent: u64,
    /// The instant the window ended at, read while the snapshot was held.
    pub as_of: DateTime<Utc>,
}

/// Append-only log of purchase events.
///
/// Implementations own their storage exclusively; callers only see these two
/// operations. Neither operation can fail.
pub trait EventLog: Send + Sync {
    /// Appends `event` and returns the log length right after the append.
    ///
    /// Concurrent callers never observe the same count.
    fn append(&self, event: PurchaseEvent) -> u64;

    /// Counts all events and the events that occurred within `window` of
    /// now, both taken from one snapshot.
    ///
    /// `clock` is read only once the snapshot is held, so every event in the
    /// snapshot was appended no later than the returned `as_of`.
    ///
    /// A zero or negative `window` yields `recent == 0`. Upstream callers
    /// restrict windows to 6 minutes..=168 hours (see `StatsWindow`), but any
    /// duration is accepted here.
    fn stats(&self, window: TimeDelta, clock: &dyn Clock) -> LogStats;
}
