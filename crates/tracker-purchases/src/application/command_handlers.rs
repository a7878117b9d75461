//! Command handlers for the purchases context.

use chrono::{DateTime, Utc};
use tracing::{info, warn};
use tracker_core::command::Command;
use tracker_core::error::DomainError;
use tracker_core::event::{PurchaseEvent, UNKNOWN_ORIGIN};
use tracker_core::log::EventLog;

use crate::domain::commands::RecordPurchase;
use crate::domain::timestamp::{self, TimestampSource};

/// Outcome of a recorded purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PurchaseRecorded {
    /// Log length right after this purchase was appended.
    pub total_purchases: u64,
    /// The resolved event time.
    pub occurred_at: DateTime<Utc>,
    /// Which signal the event time came from.
    pub timestamp_source: TimestampSource,
}

/// Handles the `RecordPurchase` command: validates the quantity, resolves
/// the event time from the request signals, and appends the event.
///
/// # Errors
///
/// Returns `DomainError::Validation` if the quantity is not positive or does
/// not fit in a `u32`.
pub fn handle_record_purchase(
    command: &RecordPurchase,
    log: &dyn EventLog,
) -> Result<PurchaseRecorded, DomainError> {
    let quantity = validate_quantity(command.quantity).inspect_err(|err| {
        warn!(
            correlation_id = %command.correlation_id(),
            quantity = command.quantity,
            %err,
            "rejected purchase"
        );
    })?;

    let resolved = timestamp::resolve_with_source(&command.signals, command.received_at);

    let origin_address = if command.origin_address.trim().is_empty() {
        UNKNOWN_ORIGIN.to_owned()
    } else {
        command.origin_address.clone()
    };

    let event = PurchaseEvent {
        user_id: command.user_id,
        promotion_id: command.promotion_id,
        product_id: command.product_id,
        quantity,
        origin_address,
        occurred_at: resolved.instant,
    };

    let total_purchases = log.append(event);

    info!(
        command_type = command.command_type(),
        correlation_id = %command.correlation_id(),
        total_purchases,
        timestamp_source = resolved.source.as_str(),
        "purchase recorded"
    );

    Ok(PurchaseRecorded {
        total_purchases,
        occurred_at: resolved.instant,
        timestamp_source: resolved.source,
    })
}

fn validate_quantity(quantity: i64) -> Result<u32, DomainError> {
    if quantity <= 0 {
        return Err(DomainError::Validation(
            "product quantity must be positive".into(),
        ));
    }
    u32::try_from(quantity).map_err(|_| {
        DomainError::Validation(format!("product quantity must not exceed {}", u32::MAX))
    })
}
