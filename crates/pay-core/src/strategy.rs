//! # Checkout Provider Trait
//!
//! Strategy trait for payment providers. The API layer only sees
//! `CheckoutProvider`, so the SumUp client can be swapped for a test double
//! or another provider without touching handlers.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 CheckoutProvider (trait)                    │
//! │  ├── create_checkout()                                      │
//! │  └── provider_name()                                        │
//! └─────────────────────────────────────────────────────────────┘
//!                            ▲
//!                  ┌─────────┴─────────┐
//!          ┌───────┴───────┐   ┌───────┴───────┐
//!          │ SumUpCheckout │   │  test doubles │
//!          │   Strategy    │   │               │
//!          └───────────────┘   └───────────────┘
//! ```

use crate::checkout::{CheckoutRequest, CheckoutSession, ProviderCredentials};
use crate::error::PaymentResult;
use async_trait::async_trait;
use std::sync::Arc;

/// Core trait for payment provider implementations.
#[async_trait]
pub trait CheckoutProvider: Send + Sync {
    /// Create a checkout session at the provider.
    ///
    /// # Arguments
    /// * `credentials` - Access token and merchant code
    /// * `request` - Amount, currency, description and our reference
    ///
    /// # Returns
    /// The created `CheckoutSession`, or `PaymentError::ProviderError`
    /// carrying the provider's status and body when it refuses.
    async fn create_checkout(
        &self,
        credentials: &ProviderCredentials,
        request: &CheckoutRequest,
    ) -> PaymentResult<CheckoutSession>;

    /// Get the provider name (for logging).
    fn provider_name(&self) -> &'static str;
}

/// Type alias for a boxed checkout provider (dynamic dispatch)
pub type BoxedCheckoutProvider = Arc<dyn CheckoutProvider>;
