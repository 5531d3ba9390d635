//! # Checkout Types
//!
//! Checkout request, session and credential types shared by providers and
//! the API layer.

use crate::booking::BookingRequest;
use crate::error::{PaymentError, PaymentResult};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Prefix of every checkout reference this service issues
pub const CHECKOUT_REFERENCE_PREFIX: &str = "UKVIP-";

/// Build a checkout reference for the given instant.
///
/// Two requests in the same millisecond get the same reference.
pub fn checkout_reference_at(now: DateTime<Utc>) -> String {
    format!("{}{}", CHECKOUT_REFERENCE_PREFIX, now.timestamp_millis())
}

/// Build a checkout reference for the current instant
pub fn checkout_reference() -> String {
    checkout_reference_at(Utc::now())
}

/// Provider credentials, both required
#[derive(Clone, PartialEq, Eq)]
pub struct ProviderCredentials {
    pub access_token: String,
    pub merchant_code: String,
}

impl ProviderCredentials {
    /// Resolve credentials from optional configuration values.
    ///
    /// Empty strings count as missing.
    pub fn resolve(
        access_token: Option<&str>,
        merchant_code: Option<&str>,
    ) -> PaymentResult<Self> {
        match (
            access_token.filter(|t| !t.is_empty()),
            merchant_code.filter(|m| !m.is_empty()),
        ) {
            (Some(token), Some(merchant)) => Ok(Self {
                access_token: token.to_string(),
                merchant_code: merchant.to_string(),
            }),
            _ => Err(PaymentError::not_configured()),
        }
    }

    /// Get authorization header value
    pub fn auth_header(&self) -> String {
        format!("Bearer {}", self.access_token)
    }
}

// Keep the token out of logs.
impl std::fmt::Debug for ProviderCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderCredentials")
            .field("access_token", &"***")
            .field("merchant_code", &self.merchant_code)
            .finish()
    }
}

/// What we ask the provider to collect
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckoutRequest {
    pub amount: f64,
    pub currency: String,
    pub description: String,
    pub checkout_reference: String,
}

impl CheckoutRequest {
    /// Build a checkout request for a booking
    pub fn for_booking(booking: &BookingRequest, checkout_reference: impl Into<String>) -> Self {
        Self {
            amount: booking.amount,
            currency: booking.currency.clone(),
            description: booking.description.clone(),
            checkout_reference: checkout_reference.into(),
        }
    }
}

/// A checkout session created at the provider.
///
/// The provider is the system of record; this is never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckoutSession {
    /// Provider-issued id
    pub id: String,
    pub checkout_reference: String,
    pub amount: f64,
    pub currency: String,
    pub description: String,
    pub merchant_code: String,
}

impl CheckoutSession {
    pub fn from_request(
        id: impl Into<String>,
        request: &CheckoutRequest,
        merchant_code: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            checkout_reference: request.checkout_reference.clone(),
            amount: request.amount,
            currency: request.currency.clone(),
            description: request.description.clone(),
            merchant_code: merchant_code.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_checkout_reference_format() {
        let at = DateTime::from_timestamp_millis(1_717_171_717_123).unwrap();
        assert_eq!(checkout_reference_at(at), "UKVIP-1717171717123");

        let now = checkout_reference();
        assert!(now.starts_with("UKVIP-"));
        assert!(now["UKVIP-".len()..].parse::<i64>().is_ok());
    }

    #[test]
    fn test_credentials_require_both() {
        assert!(ProviderCredentials::resolve(Some("tok"), Some("MC01")).is_ok());

        for (token, merchant) in [
            (None, Some("MC01")),
            (Some("tok"), None),
            (Some(""), Some("MC01")),
            (Some("tok"), Some("")),
            (None, None),
        ] {
            let err = ProviderCredentials::resolve(token, merchant).unwrap_err();
            assert_eq!(err.status_code(), 500);
            assert_eq!(err.to_string(), "Server is not configured (token/merchant)");
        }
    }

    #[test]
    fn test_credentials_debug_hides_token() {
        let creds = ProviderCredentials::resolve(Some("secret-token"), Some("MC01")).unwrap();
        let debug = format!("{:?}", creds);
        assert!(!debug.contains("secret-token"));
        assert_eq!(creds.auth_header(), "Bearer secret-token");
    }

    #[test]
    fn test_request_for_booking() {
        let booking = BookingRequest::from_json(&json!({"amount": "75"})).unwrap();
        let request = CheckoutRequest::for_booking(&booking, "UKVIP-1");

        assert_eq!(request.amount, 75.0);
        assert_eq!(request.currency, "EUR");
        assert_eq!(request.description, "VIP Transfer");
        assert_eq!(request.checkout_reference, "UKVIP-1");

        let session = CheckoutSession::from_request("abc123", &request, "MC01");
        assert_eq!(session.id, "abc123");
        assert_eq!(session.checkout_reference, "UKVIP-1");
        assert_eq!(session.merchant_code, "MC01");
    }
}
