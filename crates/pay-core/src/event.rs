//! # Payment Status Events
//!
//! Provider-neutral view of an inbound payment-status webhook.

use serde_json::Value;

/// A payment-status event as reported by the provider.
///
/// Fields are already resolved to display strings; `raw` keeps the whole
/// payload for the audit dump.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentStatusEvent {
    pub status: String,
    pub amount: String,
    pub currency: String,
    pub checkout_id: String,
    pub raw: Value,
}

impl PaymentStatusEvent {
    /// Pretty-printed raw payload
    pub fn raw_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_raw_pretty() {
        let event = PaymentStatusEvent {
            status: "PAID".into(),
            amount: "10".into(),
            currency: "EUR".into(),
            checkout_id: "c1".into(),
            raw: json!({"status": "PAID"}),
        };
        assert_eq!(event.raw_pretty().unwrap(), "{\n  \"status\": \"PAID\"\n}");
    }
}
