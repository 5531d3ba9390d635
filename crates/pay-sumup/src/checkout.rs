//! # SumUp Checkouts
//!
//! Implementation of the SumUp checkout-creation API
//! (`POST /v0.1/checkouts`).

use crate::config::SumUpConfig;
use async_trait::async_trait;
use pay_core::{
    CheckoutProvider, CheckoutRequest, CheckoutSession, PaymentError, PaymentResult,
    ProviderCredentials,
};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, error, info, instrument};

/// SumUp checkout strategy
///
/// Creates a checkout at SumUp; the customer then pays it through SumUp's
/// hosted card widget using the returned id.
pub struct SumUpCheckoutStrategy {
    config: SumUpConfig,
    client: Client,
}

impl SumUpCheckoutStrategy {
    /// Create a new SumUp checkout strategy
    pub fn new(config: SumUpConfig) -> PaymentResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| PaymentError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// Create from environment variables
    pub fn from_env() -> PaymentResult<Self> {
        Self::new(SumUpConfig::from_env())
    }

    pub fn config(&self) -> &SumUpConfig {
        &self.config
    }
}

#[async_trait]
impl CheckoutProvider for SumUpCheckoutStrategy {
    #[instrument(skip(self, credentials, request), fields(reference = %request.checkout_reference))]
    async fn create_checkout(
        &self,
        credentials: &ProviderCredentials,
        request: &CheckoutRequest,
    ) -> PaymentResult<CheckoutSession> {
        let body = SumUpCheckoutBody {
            amount: request.amount,
            currency: &request.currency,
            description: &request.description,
            merchant_code: &credentials.merchant_code,
            checkout_reference: &request.checkout_reference,
        };

        let url = self.config.checkouts_url();
        debug!("Creating SumUp checkout: amount={} {}", request.amount, request.currency);

        let response = self
            .client
            .post(&url)
            .header("Authorization", credentials.auth_header())
            .json(&body)
            .send()
            .await
            .map_err(|e| PaymentError::NetworkError(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| PaymentError::NetworkError(e.to_string()))?;

        // SumUp answers JSON on both paths; anything else is unexpected.
        let data: Value = serde_json::from_str(&text).map_err(|e| {
            PaymentError::Serialization(format!(
                "Failed to parse SumUp response (HTTP {}): {}",
                status, e
            ))
        })?;

        if !status.is_success() {
            error!("SumUp API error: status={}, body={}", status, text);
            return Err(PaymentError::ProviderError {
                provider: "sumup".to_string(),
                status: status.as_u16(),
                body: data,
            });
        }

        let created: SumUpCheckoutResponse = serde_json::from_value(data).map_err(|e| {
            PaymentError::Serialization(format!("Failed to parse SumUp checkout: {}", e))
        })?;

        info!(
            "Created SumUp checkout: id={}, status={}",
            created.id,
            created.status.as_deref().unwrap_or("unknown")
        );

        Ok(CheckoutSession::from_request(
            created.id,
            request,
            credentials.merchant_code.clone(),
        ))
    }

    fn provider_name(&self) -> &'static str {
        "sumup"
    }
}

// =============================================================================
// SumUp API Types
// =============================================================================

#[derive(Debug, Serialize)]
struct SumUpCheckoutBody<'a> {
    amount: f64,
    currency: &'a str,
    description: &'a str,
    merchant_code: &'a str,
    checkout_reference: &'a str,
}

#[derive(Debug, Deserialize)]
struct SumUpCheckoutResponse {
    id: String,
    #[serde(default)]
    status: Option<String>,
}
