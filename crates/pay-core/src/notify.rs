//! # Admin Notifications
//!
//! The mail capability both handlers share. Delivery is best-effort: callers
//! log a `NotifyError` and carry on.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// One email to the site admin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminNotification {
    pub subject: String,
    pub html: String,
}

impl AdminNotification {
    pub fn new(subject: impl Into<String>, html: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            html: html.into(),
        }
    }
}

/// Why a notification was not delivered
#[derive(Debug, Error)]
pub enum NotifyError {
    /// A required mail setting is missing
    #[error("Mail is not configured: {0} not set")]
    NotConfigured(&'static str),

    /// Sender or recipient address does not parse
    #[error("Invalid mail address {address:?}: {reason}")]
    InvalidAddress { address: String, reason: String },

    /// Message could not be assembled
    #[error("Failed to build message: {0}")]
    Message(String),

    /// Relay refused or connection failed
    #[error("Mail transport error: {0}")]
    Transport(String),
}

/// Sends admin notifications
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Send one notification
    async fn send(&self, notification: &AdminNotification) -> Result<(), NotifyError>;
}

/// Type alias for a shared notifier
pub type BoxedNotifier = Arc<dyn Notifier>;
