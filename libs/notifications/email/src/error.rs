//! Error types for the notification library.

use thiserror::Error;

/// Result type for notification operations.
pub type NotificationResult<T> = Result<T, NotificationError>;

/// Errors that can occur when sending a notification.
#[derive(Debug, Error)]
pub enum NotificationError {
    /// The underlying transport refused or failed to send
    #[error("Provider error: {0}")]
    Provider(String),
}
