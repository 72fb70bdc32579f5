use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};
use sea_orm::{DatabaseConnection, TransactionTrait};
use validator::Validate;

use crate::error::{UserError, UserResult};
use crate::models::{CreateUser, DeletedUserResponse, UpdateUser, UserResponse};
use crate::postgres::PgUserRepository;

/// Business rules on top of [`PgUserRepository`].
///
/// Every operation runs inside its own transaction; an error before
/// commit rolls the transaction back when it is dropped.
#[derive(Clone)]
pub struct UserService {
    db: DatabaseConnection,
}

impl UserService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Validate the input, hash the password, insert the row
    pub async fn create_user(&self, input: CreateUser) -> UserResult<UserResponse> {
        input.validate()?;
        let hashed_password = self.hash_password(&input.password)?;

        let txn = self.db.begin().await?;
        let user = PgUserRepository::new(&txn)
            .create(input.name, input.surname, hashed_password)
            .await?;
        txn.commit().await?;

        tracing::info!(user_id = user.id, "Created user");
        Ok(user.into())
    }

    /// Fetch one user, erroring when the id is unknown
    pub async fn get_user(&self, user_id: i64) -> UserResult<UserResponse> {
        let txn = self.db.begin().await?;
        let user = PgUserRepository::new(&txn)
            .get_by_id(user_id)
            .await?
            .ok_or(UserError::NotFound(user_id))?;
        txn.commit().await?;

        Ok(user.into())
    }

    /// List all users
    pub async fn get_all_users(&self) -> UserResult<Vec<UserResponse>> {
        let txn = self.db.begin().await?;
        let users = PgUserRepository::new(&txn).get_all().await?;
        txn.commit().await?;

        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    /// Apply a partial update to an existing user
    pub async fn update_user(&self, user_id: i64, changes: UpdateUser) -> UserResult<UserResponse> {
        if !changes.has_updates() {
            return Err(UserError::Validation(
                "At least one parameter for user update info should be provided".to_string(),
            ));
        }
        changes.validate()?;

        let txn = self.db.begin().await?;
        let repo = PgUserRepository::new(&txn);
        repo.get_by_id(user_id)
            .await?
            .ok_or(UserError::NotFound(user_id))?;
        let user = repo
            .update(user_id, &changes)
            .await?
            .ok_or(UserError::NotFound(user_id))?;
        txn.commit().await?;

        tracing::info!(user_id = user.id, "Updated user");
        Ok(user.into())
    }

    /// Delete a user, returning the deleted id
    pub async fn delete_user(&self, user_id: i64) -> UserResult<DeletedUserResponse> {
        let txn = self.db.begin().await?;
        let repo = PgUserRepository::new(&txn);
        repo.get_by_id(user_id)
            .await?
            .ok_or(UserError::NotFound(user_id))?;
        let deleted_user_id = repo
            .delete(user_id)
            .await?
            .ok_or(UserError::NotFound(user_id))?;
        txn.commit().await?;

        tracing::info!(user_id = deleted_user_id, "Deleted user");
        Ok(DeletedUserResponse { deleted_user_id })
    }

    fn hash_password(&self, password: &str) -> UserResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| UserError::PasswordHash(e.to_string()))
    }
}
