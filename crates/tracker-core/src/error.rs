//! Domain error types.

use thiserror::Error;

use crate::window::{MAX_WINDOW_HOURS, MIN_WINDOW_HOURS};

/// Top-level domain error type.
///
/// The event log itself never fails; these errors come from validating
/// input before it reaches the log.
#[derive(Debug, Error, PartialEq)]
pub enum DomainError {
    /// A business field failed validation.
    #[error("validation error: {0}")]
    Validation(String),

    /// A statistics window outside the supported range.
    #[error(
        "timeframe_hours must be between {min} and {max}, got {hours}",
        min = MIN_WINDOW_HOURS,
        max = MAX_WINDOW_HOURS
    )]
    WindowOutOfRange {
        /// The rejected window, in hours.
        hours: f64,
    },
}
