//! Shared test doubles and builders for the purchase tracker.

mod builders;
mod clock;
mod event_log;

pub use builders::{purchase, purchase_at};
pub use clock::{FixedClock, SteppingClock};
pub use event_log::RecordingEventLog;
