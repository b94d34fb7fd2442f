use async_trait::async_trait;

use crate::error::UserResult;
use crate::models::User;

/// Repository trait for User storage
///
/// This trait defines the data access interface for the user store.
/// The reference implementation is [`crate::memory::MemoryUserRepository`];
/// alternative backends implement the same contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Append the user if and only if it is valid; invalid users are
    /// dropped without signalling an error.
    async fn add(&self, user: User) -> UserResult<()>;

    /// First user with a matching identifier.
    async fn find_by_id(&self, id: u64) -> UserResult<Option<User>>;

    /// First user with an exactly matching email (case-sensitive).
    async fn find_by_email(&self, email: &str) -> UserResult<Option<User>>;

    /// Remove the given record by equality. Returns whether a record was
    /// removed.
    async fn remove(&self, user: &User) -> UserResult<bool>;

    /// Snapshot of all users in insertion order.
    async fn list_all(&self) -> UserResult<Vec<User>>;
}
