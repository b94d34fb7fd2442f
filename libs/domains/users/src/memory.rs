//! In-memory implementation of UserRepository

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::UserResult;
use crate::models::User;
use crate::repository::UserRepository;

/// In-memory user store.
///
/// Users live in an insertion-ordered `Vec` behind an `RwLock`: lookups
/// take the read lock and may run concurrently, mutations take the write
/// lock. Lookups are linear scans, which is fine at directory scale; an
/// id/email index would be a behavior-preserving optimization if the
/// dataset grows.
///
/// The store is never persisted. It is created at service start and lives
/// until process exit.
#[derive(Default)]
pub struct MemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn add(&self, user: User) -> UserResult<()> {
        // Invalid records are silently dropped, per the store contract.
        if !user.is_valid() {
            return Ok(());
        }
        self.users.write().await.push(user);
        Ok(())
    }

    async fn find_by_id(&self, id: u64) -> UserResult<Option<User>> {
        Ok(self.users.read().await.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> UserResult<Option<User>> {
        Ok(self
            .users
            .read()
            .await
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn remove(&self, user: &User) -> UserResult<bool> {
        let mut users = self.users.write().await;
        match users.iter().position(|u| u == user) {
            Some(idx) => {
                users.remove(idx);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn list_all(&self) -> UserResult<Vec<User>> {
        Ok(self.users.read().await.clone())
    }
}
