//! Email notification library.
//!
//! Provides the [`Notifier`] capability consumed by API handlers: an
//! abstract outbound-email interface with a logging stub for the reference
//! deployment and a capturing mock for tests. A real mail transport
//! implements the same trait without touching any caller.

pub mod error;
pub mod notifier;

// Re-export main types
pub use error::{NotificationError, NotificationResult};
pub use notifier::{LogNotifier, MockNotifier, Notifier, SentNotification};
