//! # SumUp Configuration
//!
//! Configuration management for the SumUp integration.
//! Secrets are loaded from environment variables. Missing credentials are
//! not a startup failure: each checkout request checks them and answers
//! with a configuration error.

use pay_core::{PaymentResult, ProviderCredentials};
use std::env;

/// Production SumUp API
pub const DEFAULT_API_BASE_URL: &str = "https://api.sumup.com";

/// SumUp API configuration
#[derive(Clone)]
pub struct SumUpConfig {
    /// OAuth access token (sent as a bearer token)
    pub access_token: Option<String>,

    /// Merchant code the checkouts are created for
    pub merchant_code: Option<String>,

    /// API base URL (for testing/mocking)
    pub api_base_url: String,
}

impl SumUpConfig {
    /// Load configuration from environment variables.
    ///
    /// Read env vars:
    /// - `SUMUP_ACCESS_TOKEN`
    /// - `SUMUP_MERCHANT_CODE`
    /// - `SUMUP_API_BASE_URL` (optional)
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok(); // Load .env file if present

        Self {
            access_token: non_empty_var("SUMUP_ACCESS_TOKEN"),
            merchant_code: non_empty_var("SUMUP_MERCHANT_CODE"),
            api_base_url: non_empty_var("SUMUP_API_BASE_URL")
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
        }
    }

    /// Create config with explicit values (for testing)
    pub fn new(
        access_token: impl Into<String>,
        merchant_code: impl Into<String>,
    ) -> Self {
        Self {
            access_token: Some(access_token.into()),
            merchant_code: Some(merchant_code.into()),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }

    /// Config without credentials (every checkout fails as unconfigured)
    pub fn unconfigured() -> Self {
        Self {
            access_token: None,
            merchant_code: None,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }

    /// Resolve the credentials, or a configuration error if either is missing
    pub fn credentials(&self) -> PaymentResult<ProviderCredentials> {
        ProviderCredentials::resolve(
            self.access_token.as_deref(),
            self.merchant_code.as_deref(),
        )
    }

    /// Whether both credentials are set
    pub fn is_configured(&self) -> bool {
        self.credentials().is_ok()
    }

    /// Checkout creation endpoint
    pub fn checkouts_url(&self) -> String {
        format!("{}/v0.1/checkouts", self.api_base_url.trim_end_matches('/'))
    }

    /// Builder: set custom API base URL (for testing)
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }
}

impl std::fmt::Debug for SumUpConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SumUpConfig")
            .field("access_token", &self.access_token.as_ref().map(|_| "***"))
            .field("merchant_code", &self.merchant_code)
            .field("api_base_url", &self.api_base_url)
            .finish()
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_resolution() {
        let config = SumUpConfig::new("tok_abc", "MC0001");
        let creds = config.credentials().unwrap();
        assert_eq!(creds.merchant_code, "MC0001");
        assert_eq!(creds.auth_header(), "Bearer tok_abc");
        assert!(config.is_configured());

        let config = SumUpConfig::unconfigured();
        assert!(!config.is_configured());
        assert_eq!(config.credentials().unwrap_err().status_code(), 500);
    }

    #[test]
    fn test_checkouts_url() {
        let config = SumUpConfig::new("tok", "MC");
        assert_eq!(config.checkouts_url(), "https://api.sumup.com/v0.1/checkouts");

        let config = config.with_api_base_url("http://127.0.0.1:9999/");
        assert_eq!(config.checkouts_url(), "http://127.0.0.1:9999/v0.1/checkouts");
    }

    #[test]
    fn test_debug_hides_token() {
        let config = SumUpConfig::new("very-secret", "MC");
        assert!(!format!("{:?}", config).contains("very-secret"));
    }
}
