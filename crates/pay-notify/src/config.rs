//! # SMTP Configuration
//!
//! Mail relay settings, loaded from environment variables. Every field is
//! optional at load time; the mailer reports what is missing when it tries
//! to send.

use std::env;
use tracing::warn;

/// Submission port used when `SMTP_PORT` is unset or unparseable
pub const DEFAULT_SMTP_PORT: u16 = 587;

/// Mail relay configuration
#[derive(Clone)]
pub struct SmtpConfig {
    /// Relay host
    pub host: Option<String>,
    /// Relay port
    pub port: u16,
    /// Login user
    pub user: Option<String>,
    /// Login password
    pub password: Option<String>,
    /// Sender address
    pub from: Option<String>,
    /// Admin recipient address
    pub admin: Option<String>,
}

impl SmtpConfig {
    /// Load from environment variables
    ///
    /// Read env vars: `SMTP_HOST`, `SMTP_PORT`, `SMTP_USER`, `SMTP_PASS`,
    /// `FROM_EMAIL`, `ADMIN_EMAIL`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            host: non_empty_var("SMTP_HOST"),
            port: parse_port(non_empty_var("SMTP_PORT").as_deref()),
            user: non_empty_var("SMTP_USER"),
            password: non_empty_var("SMTP_PASS"),
            from: non_empty_var("FROM_EMAIL"),
            admin: non_empty_var("ADMIN_EMAIL"),
        }
    }

    /// Create config with explicit relay and addresses, no login (for testing)
    pub fn new(
        host: impl Into<String>,
        port: u16,
        from: impl Into<String>,
        admin: impl Into<String>,
    ) -> Self {
        Self {
            host: Some(host.into()),
            port,
            user: None,
            password: None,
            from: Some(from.into()),
            admin: Some(admin.into()),
        }
    }

    /// Builder: set login credentials
    pub fn with_login(mut self, user: impl Into<String>, password: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self.password = Some(password.into());
        self
    }
}

impl std::fmt::Debug for SmtpConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .field("from", &self.from)
            .field("admin", &self.admin)
            .finish()
    }
}

fn parse_port(raw: Option<&str>) -> u16 {
    match raw {
        None => DEFAULT_SMTP_PORT,
        Some(value) => value.trim().parse().unwrap_or_else(|_| {
            warn!("Invalid SMTP_PORT {:?}, using {}", value, DEFAULT_SMTP_PORT);
            DEFAULT_SMTP_PORT
        }),
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.is_empty())
}
