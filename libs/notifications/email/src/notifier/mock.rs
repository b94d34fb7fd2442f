//! Mock notifier for testing

use super::Notifier;
use crate::error::{NotificationError, NotificationResult};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

/// A notification captured by [`MockNotifier`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentNotification {
    pub to: String,
    pub message: String,
}

/// Mock notifier that captures sent notifications.
pub struct MockNotifier {
    sent: Arc<Mutex<Vec<SentNotification>>>,
    should_fail: bool,
    failure_message: Option<String>,
}

impl MockNotifier {
    /// Create a new mock notifier
    pub fn new() -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            should_fail: false,
            failure_message: None,
        }
    }

    /// Create a mock notifier that always fails
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            should_fail: true,
            failure_message: Some(message.into()),
        }
    }

    /// Get all captured notifications
    pub async fn sent(&self) -> Vec<SentNotification> {
        self.sent.lock().await.clone()
    }

    /// Get the count of captured notifications
    pub async fn sent_count(&self) -> usize {
        self.sent.lock().await.len()
    }

    /// Check if a notification was sent to a specific address
    pub async fn was_sent_to(&self, email: &str) -> bool {
        self.sent.lock().await.iter().any(|n| n.to == email)
    }

    async fn record(&self, to: &str, message: &str) -> NotificationResult<()> {
        if self.should_fail {
            let message = self
                .failure_message
                .clone()
                .unwrap_or_else(|| "Mock failure".to_string());
            return Err(NotificationError::Provider(message));
        }

        self.sent.lock().await.push(SentNotification {
            to: to.to_string(),
            message: message.to_string(),
        });
        Ok(())
    }
}

impl Default for MockNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Notifier for MockNotifier {
    async fn send_welcome(&self, email: &str) -> NotificationResult<()> {
        self.record(email, "welcome").await
    }

    async fn send_notification(&self, email: &str, message: &str) -> NotificationResult<()> {
        self.record(email, message).await
    }
}
