//! # pay-core
//!
//! Core types and traits for the VIP transfer booking checkout service.
//!
//! This crate provides:
//! - `BookingRequest` validation of loosely typed booking bodies
//! - `CheckoutRequest` / `CheckoutSession` and checkout reference generation
//! - `PaymentStatusEvent`, the provider-neutral webhook view
//! - `CheckoutProvider` trait for payment providers
//! - `Notifier` trait for admin notifications
//! - `PaymentError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use pay_core::{checkout_reference, BookingRequest, CheckoutRequest, ProviderCredentials};
//!
//! let booking = BookingRequest::from_json(&body)?;
//! let credentials = ProviderCredentials::resolve(token.as_deref(), merchant.as_deref())?;
//! let request = CheckoutRequest::for_booking(&booking, checkout_reference());
//!
//! let session = provider.create_checkout(&credentials, &request).await?;
//! ```

pub mod booking;
pub mod checkout;
pub mod error;
pub mod event;
pub mod json;
pub mod notify;
pub mod strategy;

// Re-exports for convenience
pub use booking::{BookingMeta, BookingRequest, DEFAULT_CURRENCY, DEFAULT_DESCRIPTION};
pub use checkout::{
    checkout_reference, checkout_reference_at, CheckoutRequest, CheckoutSession,
    ProviderCredentials, CHECKOUT_REFERENCE_PREFIX,
};
pub use error::{PaymentError, PaymentResult};
pub use event::PaymentStatusEvent;
pub use notify::{AdminNotification, BoxedNotifier, Notifier, NotifyError};
pub use strategy::{BoxedCheckoutProvider, CheckoutProvider};
