//! Notifier trait and implementations

pub mod log;
pub mod mock;

pub use log::LogNotifier;
pub use mock::{MockNotifier, SentNotification};

use crate::error::NotificationResult;
use async_trait::async_trait;

/// Abstract outbound-email capability.
///
/// Callers depend only on this trait, so the concrete transport can be
/// swapped without touching them. Delivery failures surface as errors to
/// the caller, which decides whether they matter.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Send a welcome notification to a newly registered address.
    async fn send_welcome(&self, email: &str) -> NotificationResult<()>;

    /// Send a notification with an arbitrary message.
    async fn send_notification(&self, email: &str, message: &str) -> NotificationResult<()>;
}
