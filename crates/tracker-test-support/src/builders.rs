//! Builders for `PurchaseEvent` values.

use chrono::{DateTime, Utc};
use tracker_core::event::PurchaseEvent;

/// A purchase of one unit by user 1 that occurred at `occurred_at`.
#[must_use]
pub fn purchase_at(occurred_at: DateTime<Utc>) -> PurchaseEvent {
    purchase(1, 1, occurred_at)
}

/// A purchase with the given user, quantity and time; the remaining fields get
/// fixed placeholder values.
#[must_use]
pub fn purchase(user_id: i64, quantity: u32, occurred_at: DateTime<Utc>) -> PurchaseEvent {
    PurchaseEvent {
        user_id,
        promotion_id: 7,
        product_id: 42,
        quantity,
        origin_address: "203.0.113.10".to_owned(),
        occurred_at,
    }
}
