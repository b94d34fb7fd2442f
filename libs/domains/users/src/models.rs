use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// User record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Unique identifier, assigned by the service, never reused
    pub id: u64,
    /// Display name (non-empty)
    pub username: String,
    /// Email address (non-empty, unique across users)
    pub email: String,
}

impl User {
    /// A record is valid only when both username and email are non-empty.
    pub fn is_valid(&self) -> bool {
        !self.username.is_empty() && !self.email.is_empty()
    }
}

/// DTO for creating a new user.
///
/// Absent fields deserialize to empty strings, so a missing field fails
/// validation the same way an empty one does.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateUser {
    #[serde(default)]
    #[validate(length(min = 1))]
    pub username: String,
    #[serde(default)]
    #[validate(length(min = 1))]
    pub email: String,
}
