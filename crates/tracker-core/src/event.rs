//! The purchase event recorded by the event log.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Placeholder origin used when no client address can be determined.
pub const UNKNOWN_ORIGIN: &str = "unknown";

/// A single recorded purchase. Immutable once appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseEvent {
    /// The acting user.
    pub user_id: i64,
    /// The promotion the purchase was made under.
    pub promotion_id: i64,
    /// The purchased product.
    pub product_id: i64,
    /// Units purchased. Always positive; validated before construction.
    pub quantity: u32,
    /// Best-effort network origin of the request.
    pub origin_address: String,
    /// Resolved event time.
    pub occurred_at: DateTime<Utc>,
}
