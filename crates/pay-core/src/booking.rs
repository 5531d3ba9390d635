//! # Booking Request
//!
//! The inbound description of a transfer booking, validated out of a loosely
//! typed JSON body.

use crate::error::{PaymentError, PaymentResult};
use crate::json::{display_field, display_value, is_truthy};
use serde_json::Value;

/// Currency used when the request does not name one
pub const DEFAULT_CURRENCY: &str = "EUR";

/// Description used when the request does not carry one
pub const DEFAULT_DESCRIPTION: &str = "VIP Transfer";

/// A validated booking request
#[derive(Debug, Clone, PartialEq)]
pub struct BookingRequest {
    /// Amount as the caller sent it (for display)
    pub raw_amount: Value,
    /// Amount coerced to a number (for the provider)
    pub amount: f64,
    /// ISO currency code
    pub currency: String,
    /// Free-text description shown on the provider's checkout
    pub description: String,
    /// Booking details, echoed back unmodified
    pub meta: Value,
}

impl BookingRequest {
    /// Validate a decoded request body.
    ///
    /// A body that is not an object is treated as empty, so it fails on the
    /// amount check like any other request without an amount.
    pub fn from_json(body: &Value) -> PaymentResult<Self> {
        let raw_amount = body
            .get("amount")
            .filter(|v| is_truthy(v))
            .cloned()
            .ok_or_else(PaymentError::amount_required)?;

        let amount = coerce_amount(&raw_amount)?;

        let currency = string_or(body, "currency", DEFAULT_CURRENCY);
        let description = string_or(body, "description", DEFAULT_DESCRIPTION);

        let meta = match body.get("meta") {
            None => Value::Object(Default::default()),
            Some(meta) => meta.clone(),
        };

        Ok(Self {
            raw_amount,
            amount,
            currency,
            description,
            meta,
        })
    }

    /// Amount rendered the way the caller sent it
    pub fn amount_display(&self) -> String {
        display_value(&self.raw_amount)
    }

    /// Typed view over `meta` for rendering
    pub fn meta_view(&self) -> BookingMeta {
        BookingMeta::from_json(&self.meta)
    }
}

/// Recognized booking details, each empty when absent
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingMeta {
    pub route: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub pickup: String,
    pub dropoff: String,
    pub date: String,
    pub time: String,
    pub car_class: String,
    pub car_model: String,
}

impl BookingMeta {
    pub fn from_json(meta: &Value) -> Self {
        Self {
            route: display_field(meta, "route"),
            name: display_field(meta, "name"),
            email: display_field(meta, "email"),
            phone: display_field(meta, "phone"),
            pickup: display_field(meta, "pickup"),
            dropoff: display_field(meta, "dropoff"),
            date: display_field(meta, "date"),
            time: display_field(meta, "time"),
            car_class: display_field(meta, "carClass"),
            car_model: display_field(meta, "carModel"),
        }
    }
}

fn coerce_amount(raw: &Value) -> PaymentResult<f64> {
    let parsed = match raw {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Bool(true) => Some(1.0),
        _ => None,
    };

    parsed
        .filter(|f| f.is_finite())
        .ok_or_else(|| PaymentError::InvalidRequest("Amount must be a number".to_string()))
}

fn string_or(body: &Value, key: &str, default: &str) -> String {
    body.get(key)
        .and_then(Value::as_str)
        .unwrap_or(default)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults_applied() {
        let booking = BookingRequest::from_json(&json!({"amount": 150})).unwrap();

        assert_eq!(booking.amount, 150.0);
        assert_eq!(booking.currency, "EUR");
        assert_eq!(booking.description, "VIP Transfer");
        assert_eq!(booking.meta, json!({}));
    }

    #[test]
    fn test_explicit_fields_kept() {
        let body = json!({
            "amount": "89.90",
            "currency": "GBP",
            "description": "Airport run",
            "meta": {"route": "LHR → Mayfair", "extra": [1, 2]}
        });
        let booking = BookingRequest::from_json(&body).unwrap();

        assert_eq!(booking.amount, 89.9);
        assert_eq!(booking.amount_display(), "89.90");
        assert_eq!(booking.currency, "GBP");
        assert_eq!(booking.description, "Airport run");
        assert_eq!(booking.meta, json!({"route": "LHR → Mayfair", "extra": [1, 2]}));
    }

    #[test]
    fn test_falsy_amount_rejected() {
        for body in [
            json!({}),
            json!({"amount": 0}),
            json!({"amount": ""}),
            json!({"amount": null}),
            json!({"amount": false}),
            json!("not an object"),
            Value::Null,
        ] {
            let err = BookingRequest::from_json(&body).unwrap_err();
            assert_eq!(err.status_code(), 400);
            assert_eq!(err.to_string(), "Amount is required");
        }
    }

    #[test]
    fn test_non_numeric_amount_rejected() {
        let err = BookingRequest::from_json(&json!({"amount": "abc"})).unwrap_err();
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.to_string(), "Amount must be a number");

        let err = BookingRequest::from_json(&json!({"amount": {"value": 10}})).unwrap_err();
        assert_eq!(err.status_code(), 400);
    }

    #[test]
    fn test_null_currency_falls_back() {
        let booking =
            BookingRequest::from_json(&json!({"amount": 10, "currency": null})).unwrap();
        assert_eq!(booking.currency, "EUR");
    }

    #[test]
    fn test_meta_view() {
        let booking = BookingRequest::from_json(&json!({
            "amount": 60,
            "meta": {"name": "Ada", "carClass": "Business", "carModel": "E-Class", "phone": 0}
        }))
        .unwrap();
        let meta = booking.meta_view();

        assert_eq!(meta.name, "Ada");
        assert_eq!(meta.car_class, "Business");
        assert_eq!(meta.car_model, "E-Class");
        assert_eq!(meta.phone, "");
        assert_eq!(meta.route, "");
    }
}
