//! User Service - Business logic layer

use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::instrument;
use validator::Validate;

use crate::error::{UserError, UserResult};
use crate::models::{CreateUser, User};
use crate::repository::UserRepository;

/// User service providing business logic operations
///
/// The service layer enforces record validity and email uniqueness and
/// assigns identifiers. It owns the identifier counter; the counter mutex
/// doubles as the mutation lock: `create_user` and `delete_user` hold it
/// across their whole check-then-write sequence so concurrent mutations
/// cannot interleave, while read operations never take it.
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
    next_id: Arc<Mutex<u64>>,
}

impl<R: UserRepository> UserService<R> {
    /// Create a new UserService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
            next_id: Arc::new(Mutex::new(1)),
        }
    }

    /// Create a new user with the next sequential identifier.
    ///
    /// Fails when username or email is empty, or when the email is already
    /// taken (byte-for-byte comparison). Identifiers start at 1 and are
    /// never reused, even after the user is deleted.
    #[instrument(skip(self, input), fields(username = %input.username))]
    pub async fn create_user(&self, input: CreateUser) -> UserResult<User> {
        input
            .validate()
            .map_err(|e| UserError::Validation(e.to_string()))?;

        // Uniqueness check, id assignment, and insert form one logical
        // step: no other mutation may run between them.
        let mut next_id = self.next_id.lock().await;

        if self
            .repository
            .find_by_email(&input.email)
            .await?
            .is_some()
        {
            return Err(UserError::DuplicateEmail(input.email));
        }

        let user = User {
            id: *next_id,
            username: input.username,
            email: input.email,
        };
        self.repository.add(user.clone()).await?;
        *next_id += 1;

        tracing::info!(user_id = user.id, "User created");
        Ok(user)
    }

    /// Get a user by identifier
    #[instrument(skip(self))]
    pub async fn get_user(&self, id: u64) -> UserResult<User> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id))
    }

    /// All users in creation order
    #[instrument(skip(self))]
    pub async fn list_users(&self) -> UserResult<Vec<User>> {
        self.repository.list_all().await
    }

    /// Delete a user by identifier.
    ///
    /// The deleted identifier is never reassigned.
    #[instrument(skip(self))]
    pub async fn delete_user(&self, id: u64) -> UserResult<()> {
        // Lookup and removal must not interleave with another mutation.
        let _next_id = self.next_id.lock().await;

        let user = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id))?;
        self.repository.remove(&user).await?;

        tracing::info!(user_id = id, "User deleted");
        Ok(())
    }
}

impl<R: UserRepository> Clone for UserService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            next_id: Arc::clone(&self.next_id),
        }
    }
}
