//! # SMTP Mailer
//!
//! `Notifier` backed by an SMTP relay. A fresh transport is built for every
//! send, so configuration problems surface per notification rather than at
//! startup.

use crate::config::SmtpConfig;
use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::transport::smtp::client::{Tls, TlsParameters};
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use pay_core::{AdminNotification, Notifier, NotifyError};
use tracing::{debug, instrument};

/// Sends admin notifications through the configured relay
#[derive(Debug, Clone)]
pub struct SmtpMailer {
    config: SmtpConfig,
}

impl SmtpMailer {
    pub fn new(config: SmtpConfig) -> Self {
        Self { config }
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::new(SmtpConfig::from_env())
    }

    pub fn config(&self) -> &SmtpConfig {
        &self.config
    }

    fn build_message(&self, notification: &AdminNotification) -> Result<Message, NotifyError> {
        let from = mailbox(self.config.from.as_deref(), "FROM_EMAIL")?;
        let to = mailbox(self.config.admin.as_deref(), "ADMIN_EMAIL")?;

        Message::builder()
            .from(from)
            .to(to)
            .subject(notification.subject.as_str())
            .header(ContentType::TEXT_HTML)
            .body(notification.html.clone())
            .map_err(|e| NotifyError::Message(e.to_string()))
    }

    // Plain connection, upgraded with STARTTLS when the relay offers it.
    fn build_transport(&self) -> Result<AsyncSmtpTransport<Tokio1Executor>, NotifyError> {
        let host = self
            .config
            .host
            .clone()
            .ok_or(NotifyError::NotConfigured("SMTP_HOST"))?;

        let tls = TlsParameters::new(host.clone())
            .map_err(|e| NotifyError::Transport(e.to_string()))?;

        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(host)
            .port(self.config.port)
            .tls(Tls::Opportunistic(tls));

        if let (Some(user), Some(password)) = (&self.config.user, &self.config.password) {
            builder = builder.credentials(Credentials::new(user.clone(), password.clone()));
        }

        Ok(builder.build())
    }
}

#[async_trait]
impl Notifier for SmtpMailer {
    #[instrument(skip(self, notification), fields(subject = %notification.subject))]
    async fn send(&self, notification: &AdminNotification) -> Result<(), NotifyError> {
        let message = self.build_message(notification)?;
        let transport = self.build_transport()?;

        let response = transport
            .send(message)
            .await
            .map_err(|e| NotifyError::Transport(e.to_string()))?;

        debug!("Relay accepted notification: code={}", response.code());
        Ok(())
    }
}

fn mailbox(address: Option<&str>, setting: &'static str) -> Result<Mailbox, NotifyError> {
    let address = address.ok_or(NotifyError::NotConfigured(setting))?;
    address
        .parse::<Mailbox>()
        .map_err(|e| NotifyError::InvalidAddress {
            address: address.to_string(),
            reason: e.to_string(),
        })
}
