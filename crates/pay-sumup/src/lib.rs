//! # pay-sumup
//!
//! SumUp checkout provider for the VIP transfer booking service.
//!
//! - **SumUpCheckoutStrategy** creates checkouts via `POST /v0.1/checkouts`
//! - **parse_webhook_event** resolves SumUp payment-status callbacks
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pay_sumup::{SumUpCheckoutStrategy, SumUpConfig};
//! use pay_core::{CheckoutProvider, CheckoutRequest};
//!
//! let config = SumUpConfig::from_env();
//! let credentials = config.credentials()?;
//! let strategy = SumUpCheckoutStrategy::new(config)?;
//!
//! let session = strategy.create_checkout(&credentials, &request).await?;
//! // Hand session.id to the SumUp card widget
//! ```

pub mod checkout;
pub mod config;
pub mod webhook;

// Re-exports
pub use checkout::SumUpCheckoutStrategy;
pub use config::{SumUpConfig, DEFAULT_API_BASE_URL};
pub use webhook::{parse_webhook_event, PLACEHOLDER, UNKNOWN_STATUS};
