//! # SumUp Webhook Handling
//!
//! Field extraction for SumUp payment-status callbacks. SumUp has sent the
//! same facts under different keys over time, so each field is resolved from
//! an ordered list of aliases: the first truthy one wins.
//!
//! Callbacks are not signed; nothing here proves an event came from SumUp.

use pay_core::json::{display_value, first_truthy};
use pay_core::{PaymentStatusEvent, DEFAULT_CURRENCY};
use serde_json::Value;
use tracing::debug;

/// Shown when an event carries no amount or checkout id
pub const PLACEHOLDER: &str = "—";

/// Status used when an event names none
pub const UNKNOWN_STATUS: &str = "unknown";

const STATUS_KEYS: &[&str] = &["status", "transaction_status"];
const AMOUNT_KEYS: &[&str] = &["amount", "transaction_amount"];
const CURRENCY_KEYS: &[&str] = &["currency"];
const CHECKOUT_ID_KEYS: &[&str] = &["checkout_id", "id"];

/// Resolve a raw SumUp callback into a `PaymentStatusEvent`.
///
/// Never fails: anything missing falls back to a placeholder, and a payload
/// that is not an object yields an event made only of fallbacks.
pub fn parse_webhook_event(raw: Value) -> PaymentStatusEvent {
    let pick = |keys: &[&str], fallback: &str| {
        first_truthy(&raw, keys)
            .map(display_value)
            .unwrap_or_else(|| fallback.to_string())
    };

    let event = PaymentStatusEvent {
        status: pick(STATUS_KEYS, UNKNOWN_STATUS),
        amount: pick(AMOUNT_KEYS, PLACEHOLDER),
        currency: pick(CURRENCY_KEYS, DEFAULT_CURRENCY),
        checkout_id: pick(CHECKOUT_ID_KEYS, PLACEHOLDER),
        raw: Value::Null,
    };

    debug!(
        "Parsed SumUp webhook: status={}, checkout_id={}",
        event.status, event.checkout_id
    );

    PaymentStatusEvent { raw, ..event }
}
