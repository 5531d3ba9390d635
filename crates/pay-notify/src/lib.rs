//! # pay-notify
//!
//! Admin email notifications for the VIP transfer booking service.
//!
//! This crate provides:
//! - `SmtpMailer`, a `Notifier` that sends through an SMTP relay
//! - `templates` for the pending-booking and booking-paid emails
//! - `send_best_effort`, which logs delivery failures instead of returning them

pub mod config;
pub mod mailer;
pub mod templates;

pub use config::{SmtpConfig, DEFAULT_SMTP_PORT};
pub use mailer::SmtpMailer;

use pay_core::{AdminNotification, Notifier};
use tracing::{error, info};

/// Send a notification, logging instead of propagating failure.
///
/// Returns whether the notification was delivered.
pub async fn send_best_effort(notifier: &dyn Notifier, notification: &AdminNotification) -> bool {
    match notifier.send(notification).await {
        Ok(()) => {
            info!("Admin notified: {}", notification.subject);
            true
        }
        Err(e) => {
            error!("Mail error: {}", e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use pay_core::NotifyError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingNotifier {
        sends: AtomicUsize,
        fail: bool,
    }

    #[async_trait]
    impl Notifier for CountingNotifier {
        async fn send(&self, _notification: &AdminNotification) -> Result<(), NotifyError> {
            self.sends.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(NotifyError::Transport("relay refused".into()))
            } else {
                Ok(())
            }
        }
    }

    #[tokio::test]
    async fn test_best_effort_reports_outcome() {
        let mail = AdminNotification::new("subject", "<p>body</p>");

        let ok = CountingNotifier { sends: AtomicUsize::new(0), fail: false };
        assert!(send_best_effort(&ok, &mail).await);

        let failing = CountingNotifier { sends: AtomicUsize::new(0), fail: true };
        assert!(!send_best_effort(&failing, &mail).await);
        assert_eq!(failing.sends.load(Ordering::SeqCst), 1);
    }
}
