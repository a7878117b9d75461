//! Event time resolution.
//!
//! Picks the time a purchase happened from untrusted timing signals. Each
//! known signal is tried in a fixed priority order with the format expected
//! for it; the first one that parses wins. Anything unparsable counts as
//! absent, and when nothing usable is left the receive time is used.
//!
//! Values are trusted once they parse: no plausibility window is applied.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use super::signals::Signals;

/// How a signal's raw value is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalFormat {
    /// ISO-8601 / RFC 3339 date-time.
    Iso8601,
    /// Unix epoch seconds, integer or decimal.
    EpochSeconds,
    /// ISO-8601 first, then epoch seconds.
    Iso8601OrEpochSeconds,
    /// Unix epoch milliseconds.
    EpochMillis,
    /// Unix epoch microseconds.
    EpochMicros,
}

/// Known signals, highest priority first.
pub const SIGNAL_PRIORITY: [(&str, SignalFormat); 8] = [
    ("x-timestamp", SignalFormat::Iso8601),
    ("x-client-time", SignalFormat::EpochSeconds),
    ("x-request-time", SignalFormat::EpochSeconds),
    ("timestamp", SignalFormat::Iso8601OrEpochSeconds),
    ("x-request-start", SignalFormat::EpochMillis),
    ("x-queue-start", SignalFormat::EpochMicros),
    ("x-request-received", SignalFormat::EpochSeconds),
    ("x-forwarded-start", SignalFormat::EpochSeconds),
];

/// Where a resolved instant came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampSource {
    /// The named signal parsed successfully.
    Signal(&'static str),
    /// No usable signal; the receive time was used.
    ReceivedAt,
}

impl TimestampSource {
    /// Short label for logs.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Signal(name) => *name,
            Self::ReceivedAt => "received_at",
        }
    }
}

/// A resolved event time together with its provenance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedTimestamp {
    /// The chosen instant.
    pub instant: DateTime<Utc>,
    /// Which signal supplied it.
    pub source: TimestampSource,
}

/// Returns `true` if `name` is one of the signals the resolver looks at.
#[must_use]
pub fn is_known_signal(name: &str) -> bool {
    SIGNAL_PRIORITY
        .iter()
        .any(|(known, _)| known.eq_ignore_ascii_case(name))
}

/// Resolves the event time from `signals`, falling back to `received_at`.
#[must_use]
pub fn resolve(signals: &Signals, received_at: DateTime<Utc>) -> DateTime<Utc> {
    resolve_with_source(signals, received_at).instant
}

/// Like [`resolve`], but also reports which signal won.
#[must_use]
pub fn resolve_with_source(signals: &Signals, received_at: DateTime<Utc>) -> ResolvedTimestamp {
    SIGNAL_PRIORITY
        .iter()
        .find_map(|&(name, format)| {
            let raw = signals.get(name)?;
            parse_signal(raw, format).map(|instant| ResolvedTimestamp {
                instant,
                source: TimestampSource::Signal(name),
            })
        })
        .unwrap_or(ResolvedTimestamp {
            instant: received_at,
            source: TimestampSource::ReceivedAt,
        })
}

/// Parses one raw value according to `format`.
#[must_use]
pub fn parse_signal(raw: &str, format: SignalFormat) -> Option<DateTime<Utc>> {
    match format {
        SignalFormat::Iso8601 => parse_iso8601(raw),
        SignalFormat::EpochSeconds => parse_epoch(raw, 1.0),
        SignalFormat::Iso8601OrEpochSeconds => {
            parse_iso8601(raw).or_else(|| parse_epoch(raw, 1.0))
        }
        SignalFormat::EpochMillis => parse_epoch(raw, 1_000.0),
        SignalFormat::EpochMicros => parse_epoch(raw, 1_000_000.0),
    }
}

const NAIVE_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
];

/// Offset-qualified values are converted to UTC; values without an offset
/// are taken to already be UTC. A bare date means midnight UTC.
fn parse_iso8601(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }

    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .map(|naive| naive.and_utc())
}

/// Parses a finite, non-negative number and divides it by `units_per_second`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn parse_epoch(raw: &str, units_per_second: f64) -> Option<DateTime<Utc>> {
    let value: f64 = raw.trim().parse().ok()?;
    if !value.is_finite() || value < 0.0 {
        return None;
    }

    let seconds = value / units_per_second;
    let whole = seconds.trunc();
    if whole > i64::MAX as f64 {
        return None;
    }
    let nanos = (((seconds - whole) * 1e9).round() as u32).min(999_999_999);

    DateTime::from_timestamp(whole as i64, nanos)
}
