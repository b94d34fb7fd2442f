//! Logging notifier stub

use super::Notifier;
use crate::error::NotificationResult;
use async_trait::async_trait;
use tracing::info;

/// Notifier that only produces a log line.
///
/// Always reports success; there is no retry and no delivery guarantee.
/// Production deployments replace this with a real mail transport behind
/// the same trait.
#[derive(Debug, Clone, Default)]
pub struct LogNotifier;

impl LogNotifier {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Notifier for LogNotifier {
    async fn send_welcome(&self, email: &str) -> NotificationResult<()> {
        info!(to = %email, "Sending welcome email");
        Ok(())
    }

    async fn send_notification(&self, email: &str, message: &str) -> NotificationResult<()> {
        info!(to = %email, message = %message, "Sending notification");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_welcome_always_succeeds() {
        let notifier = LogNotifier::new();
        assert!(notifier.send_welcome("a@x.com").await.is_ok());
    }

    #[tokio::test]
    async fn test_notification_always_succeeds() {
        let notifier = LogNotifier::new();
        assert!(
            notifier
                .send_notification("a@x.com", "your account was updated")
                .await
                .is_ok()
        );
    }
}
