//! Commands for the purchases context.

use chrono::{DateTime, Utc};
use tracker_core::command::Command;
use uuid::Uuid;

use super::signals::Signals;

/// Command to record a single purchase.
#[derive(Debug, Clone)]
pub struct RecordPurchase {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The acting user.
    pub user_id: i64,
    /// The promotion the purchase was made under.
    pub promotion_id: i64,
    /// The purchased product.
    pub product_id: i64,
    /// Units purchased, as submitted. Must be positive.
    pub quantity: i64,
    /// Best-effort client address.
    pub origin_address: String,
    /// Timing signals taken from the request.
    pub signals: Signals,
    /// When the request reached the service.
    pub received_at: DateTime<Utc>,
}

impl Command for RecordPurchase {
    fn command_type(&self) -> &'static str {
        "purchases.record_purchase"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}
