//! Validated statistics window.

use chrono::TimeDelta;

use crate::error::DomainError;

/// Smallest accepted window (6 minutes).
pub const MIN_WINDOW_HOURS: f64 = 0.1;
/// Largest accepted window (one week).
pub const MAX_WINDOW_HOURS: f64 = 168.0;
/// Window used when the caller does not ask for one.
pub const DEFAULT_WINDOW_HOURS: f64 = 1.0;

const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// A trailing window ending at query time, expressed in hours.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatsWindow {
    hours: f64,
}

impl StatsWindow {
    /// Builds a window from a number of hours.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::WindowOutOfRange` if `hours` is not finite or lies
    /// outside `[MIN_WINDOW_HOURS, MAX_WINDOW_HOURS]`.
    pub fn from_hours(hours: f64) -> Result<Self, DomainError> {
        if !hours.is_finite() || !(MIN_WINDOW_HOURS..=MAX_WINDOW_HOURS).contains(&hours) {
            return Err(DomainError::WindowOutOfRange { hours });
        }
        Ok(Self { hours })
    }

    /// The window length in hours.
    #[must_use]
    pub fn hours(&self) -> f64 {
        self.hours
    }

    /// The window length as a duration, rounded to the millisecond.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn duration(&self) -> TimeDelta {
        TimeDelta::milliseconds((self.hours * MILLIS_PER_HOUR).round() as i64)
    }
}

impl Default for StatsWindow {
    fn default() -> Self {
        Self {
            hours: DEFAULT_WINDOW_HOURS,
        }
    }
}
