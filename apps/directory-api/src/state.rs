//! Application state management.
//!
//! The state is assembled once in `main` and handed to the route builders;
//! nothing here is a process-wide global.

use std::sync::Arc;

use domain_users::{MemoryUserRepository, UserService};
use email::Notifier;

use crate::config::Config;

/// Shared application state.
///
/// Cloning is cheap: the service shares its repository and identifier
/// counter through `Arc`s, so every clone operates on the same directory.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: Config,
    /// The user directory service, owner of the in-memory store
    pub service: UserService<MemoryUserRepository>,
    /// Outbound notification capability (logging stub by default)
    pub notifier: Arc<dyn Notifier>,
}
