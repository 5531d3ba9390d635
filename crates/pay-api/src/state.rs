//! # Application State
//!
//! Shared, read-only state for the Axum application: configuration, the
//! checkout provider and the admin notifier.

use pay_core::{BoxedCheckoutProvider, BoxedNotifier};
use pay_notify::SmtpMailer;
use pay_sumup::{SumUpCheckoutStrategy, SumUpConfig};
use std::net::SocketAddr;
use std::sync::Arc;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Environment (development, staging, production)
    pub environment: String,
}

impl AppConfig {
    /// Load from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
        }
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid socket address {}:{}: {}", self.host, self.port, e))
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Application config
    pub config: AppConfig,
    /// Provider credentials, checked on every checkout
    pub sumup: SumUpConfig,
    /// Checkout provider
    pub provider: BoxedCheckoutProvider,
    /// Admin notifier
    pub notifier: BoxedNotifier,
}

impl AppState {
    /// Create a new AppState from the environment, with SumUp and SMTP
    pub fn new() -> anyhow::Result<Self> {
        let config = AppConfig::from_env();
        let sumup = SumUpConfig::from_env();

        let provider = SumUpCheckoutStrategy::new(sumup.clone())
            .map_err(|e| anyhow::anyhow!("Failed to initialize SumUp: {}", e))?;

        let mailer = SmtpMailer::from_env();

        Ok(Self::with_parts(
            config,
            sumup,
            Arc::new(provider),
            Arc::new(mailer),
        ))
    }

    /// Assemble state from explicit parts
    pub fn with_parts(
        config: AppConfig,
        sumup: SumUpConfig,
        provider: BoxedCheckoutProvider,
        notifier: BoxedNotifier,
    ) -> Self {
        Self {
            config,
            sumup,
            provider,
            notifier,
        }
    }

    /// Name of the active checkout provider
    pub fn provider_name(&self) -> &'static str {
        self.provider.provider_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_socket_addr() {
        let config = AppConfig {
            host: "0.0.0.0".to_string(),
            port: 3000,
            environment: "test".to_string(),
        };

        let addr = config.socket_addr().unwrap();
        assert_eq!(addr.to_string(), "0.0.0.0:3000");
        assert!(!config.is_production());
    }

    #[test]
    fn test_invalid_socket_addr() {
        let config = AppConfig {
            host: "not a host".to_string(),
            port: 3000,
            environment: "production".to_string(),
        };

        assert!(config.socket_addr().is_err());
        assert!(config.is_production());
    }
}
