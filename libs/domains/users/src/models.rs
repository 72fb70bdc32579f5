use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use utoipa::ToSchema;
use validator::Validate;

/// Regex pattern for names: Latin or Cyrillic letters and hyphens
static LETTERS_AND_HYPHENS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[а-яА-Яa-zA-Z\-]+$").unwrap());

/// A row of the `users` table
#[derive(Debug, Clone, Serialize)]
pub struct User {
    /// Assigned by the database sequence
    pub id: i64,
    /// Given name
    pub name: String,
    /// Family name
    pub surname: String,
    /// Argon2 hash of the password; skipped when serializing
    #[serde(skip_serializing)]
    pub hashed_password: String,
    /// Set on insert
    pub created_at: DateTime<Utc>,
    /// Refreshed on every successful update
    pub updated_at: DateTime<Utc>,
}

/// Public view of a [`User`]: everything but the hash
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub surname: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            surname: user.surname,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Request body for user creation
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateUser {
    #[validate(regex(path = *LETTERS_AND_HYPHENS, message = "Name should contain only letters"))]
    pub name: String,
    #[validate(regex(path = *LETTERS_AND_HYPHENS, message = "Surname should contain only letters"))]
    pub surname: String,
    /// Plain password (hashed by the service layer before storage)
    pub password: String,
}

/// Request body for partial updates; absent fields keep their values
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateUser {
    #[validate(regex(path = *LETTERS_AND_HYPHENS, message = "Name should contain only letters"))]
    pub name: Option<String>,
    #[validate(regex(path = *LETTERS_AND_HYPHENS, message = "Surname should contain only letters"))]
    pub surname: Option<String>,
    #[validate(length(min = 1, message = "Hashed password should not be empty"))]
    pub hashed_password: Option<String>,
}

impl UpdateUser {
    /// True when at least one field was supplied
    pub fn has_updates(&self) -> bool {
        self.name.is_some() || self.surname.is_some() || self.hashed_password.is_some()
    }
}

/// Response after deleting a user
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeletedUserResponse {
    pub deleted_user_id: i64,
}
