//! # Payment Error Types
//!
//! Typed error handling for the booking checkout service.
//! All payment operations return `Result<T, PaymentError>`.

use serde_json::Value;
use thiserror::Error;

/// Message returned when a booking request carries no usable amount
pub const AMOUNT_REQUIRED: &str = "Amount is required";

/// Message returned when provider credentials are missing
pub const NOT_CONFIGURED: &str = "Server is not configured (token/merchant)";

/// Core error type for all payment operations
#[derive(Debug, Error)]
pub enum PaymentError {
    /// Invalid request data (client fault)
    #[error("{0}")]
    InvalidRequest(String),

    /// Configuration errors (missing credentials)
    #[error("{0}")]
    Configuration(String),

    /// Payment provider answered with a non-success status
    #[error("Provider error [{provider}]: HTTP {status}")]
    ProviderError {
        provider: String,
        status: u16,
        body: Value,
    },

    /// Network/HTTP error communicating with provider
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Internal error (should not happen)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl PaymentError {
    /// Missing or falsy `amount` in a booking request
    pub fn amount_required() -> Self {
        PaymentError::InvalidRequest(AMOUNT_REQUIRED.to_string())
    }

    /// Missing provider access token or merchant code
    pub fn not_configured() -> Self {
        PaymentError::Configuration(NOT_CONFIGURED.to_string())
    }

    /// Returns the HTTP status code appropriate for this error.
    ///
    /// Provider errors pass the provider's own status through.
    pub fn status_code(&self) -> u16 {
        match self {
            PaymentError::InvalidRequest(_) => 400,
            PaymentError::Configuration(_) => 500,
            PaymentError::ProviderError { status, .. } => *status,
            PaymentError::NetworkError(_) => 500,
            PaymentError::Serialization(_) => 500,
            PaymentError::Internal(_) => 500,
        }
    }

    /// The value placed under `error` in the response body.
    ///
    /// Provider errors carry the provider's body verbatim, everything else
    /// is the display string.
    pub fn error_body(&self) -> Value {
        match self {
            PaymentError::ProviderError { body, .. } => body.clone(),
            other => Value::String(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for PaymentError {
    fn from(err: serde_json::Error) -> Self {
        PaymentError::Serialization(err.to_string())
    }
}

/// Result type alias for payment operations
pub type PaymentResult<T> = Result<T, PaymentError>;
