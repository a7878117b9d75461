//! In-memory implementation of the `EventLog` trait.
//!
//! Appends take the write side of a reader/writer lock, so the returned count
//! is exactly the length the caller's push produced. Stats take the read side
//! and scan the whole log; there is no time index, which is fine at the scale
//! this service runs at but would need one (or bucketed counters) before the
//! log grows into the millions.

use chrono::TimeDelta;
use parking_lot::RwLock;
use tracing::debug;

use tracker_core::clock::Clock;
use tracker_core::event::PurchaseEvent;
use tracker_core::log::{EventLog, LogStats};

/// Process-lifetime, append-only purchase log.
#[derive(Debug, Default)]
pub struct InMemoryEventLog {
    events: RwLock<Vec<PurchaseEvent>>,
}

impl InMemoryEventLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of events currently in the log.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.read().len()
    }

    /// Returns `true` if nothing has been appended yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.read().is_empty()
    }
}

impl EventLog for InMemoryEventLog {
    fn append(&self, event: PurchaseEvent) -> u64 {
        let mut events = self.events.write();
        events.push(event);
        let total = events.len() as u64;
        drop(events);

        debug!(total, "purchase event appended");
        total
    }

    fn stats(&self, window: TimeDelta, clock: &dyn Clock) -> LogStats {
        let events = self.events.read();
        // Read after the guard: a reader that waited behind writers must not
        // use a "now" older than the events it is about to count.
        let now = clock.now();
        let total = events.len() as u64;

        let recent = if window <= TimeDelta::zero() {
            0
        } else {
            // `None` means the window reaches past the earliest representable
            // instant, so only the upper bound applies.
            let since = now.checked_sub_signed(window);
            events
                .iter()
                .filter(|event| {
                    event.occurred_at <= now
                        && since.is_none_or(|since| event.occurred_at >= since)
                })
                .count() as u64
        };
        drop(events);

        debug!(total, recent, window_secs = window.num_seconds(), "event log stats computed");
        LogStats {
            total,
            recent,
            as_of: now,
        }
    }
}
