//! # Request Handlers
//!
//! Axum request handlers for the booking checkout API.
//! Bodies are taken as raw bytes and decoded leniently: an undecodable body
//! is treated as carrying no fields rather than rejected.

use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use pay_core::{
    checkout_reference, BookingRequest, CheckoutProvider, CheckoutRequest, PaymentError,
};
use pay_notify::{send_best_effort, templates};
use pay_sumup::parse_webhook_event;
use serde::Serialize;
use serde_json::Value;
use std::any::Any;
use tracing::{debug, error, info, instrument};

// =============================================================================
// Request/Response Types
// =============================================================================

/// Create checkout response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCheckoutResponse {
    /// Provider checkout id (handed to the payment widget)
    pub checkout_id: String,
    /// Booking details, echoed unmodified
    pub meta: Value,
}

/// Webhook acknowledgement
#[derive(Debug, Serialize)]
pub struct WebhookAck {
    pub ok: bool,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: Value,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: Value::String(error.into()),
        }
    }
}

/// A `PaymentError` on its way out as an HTTP response
#[derive(Debug)]
pub struct ApiError(pub PaymentError);

impl From<PaymentError> for ApiError {
    fn from(err: PaymentError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body = ErrorResponse {
            error: self.0.error_body(),
        };
        (status, Json(body)).into_response()
    }
}

/// Decode a request body.
///
/// A JSON string is decoded once more, for clients that double-encode.
/// Anything that does not decode is kept as plain text, which carries no
/// fields; an empty body is `null`.
pub fn decode_body(bytes: &[u8]) -> Value {
    if bytes.is_empty() {
        return Value::Null;
    }

    match serde_json::from_slice::<Value>(bytes) {
        Ok(Value::String(inner)) => serde_json::from_str(&inner).unwrap_or_else(|e| {
            debug!("Ignoring undecodable JSON string body: {}", e);
            Value::String(inner)
        }),
        Ok(value) => value,
        Err(e) => {
            debug!("Ignoring undecodable body: {}", e);
            Value::String(String::from_utf8_lossy(bytes).into_owned())
        }
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "ukvip-checkout",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// CORS preflight
pub async fn preflight() -> StatusCode {
    StatusCode::NO_CONTENT
}

/// Any method other than POST/OPTIONS on an API route
pub async fn method_not_allowed() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorResponse::new("Use POST")),
    )
}

/// Create a SumUp checkout for a booking and notify the admin
#[instrument(skip_all)]
pub async fn create_checkout(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<CreateCheckoutResponse>, ApiError> {
    let body = decode_body(&body);

    let booking = BookingRequest::from_json(&body)?;
    let credentials = state.sumup.credentials().map_err(|e| {
        error!("Checkout refused: {}", e);
        e
    })?;

    let request = CheckoutRequest::for_booking(&booking, checkout_reference());

    info!(
        "Creating checkout: provider={}, reference={}, amount={} {}",
        state.provider_name(),
        request.checkout_reference,
        request.amount,
        request.currency
    );

    let session = state
        .provider
        .create_checkout(&credentials, &request)
        .await
        .map_err(|e| {
            error!("Failed to create checkout: {}", e);
            e
        })?;

    info!("Created checkout session: {}", session.id);

    let mail = templates::pending_booking(&booking, &session.id);
    send_best_effort(state.notifier.as_ref(), &mail).await;

    Ok(Json(CreateCheckoutResponse {
        checkout_id: session.id,
        meta: booking.meta,
    }))
}

/// Handle a SumUp payment-status callback.
///
/// Acknowledges every request it can render, so SumUp does not retry.
#[instrument(skip_all)]
pub async fn sumup_webhook(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<WebhookAck>, ApiError> {
    let event = parse_webhook_event(decode_body(&body));

    info!(
        "Received webhook: status={}, amount={} {}, checkout_id={}",
        event.status, event.amount, event.currency, event.checkout_id
    );

    let mail = templates::booking_paid(&event).map_err(PaymentError::from)?;
    send_best_effort(state.notifier.as_ref(), &mail).await;

    Ok(Json(WebhookAck { ok: true }))
}

/// Turn a handler panic into a 500 response
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic".to_string()
    };

    error!("Handler panicked: {}", message);

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new(message)),
    )
        .into_response()
}
