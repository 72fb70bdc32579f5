use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{ActiveModelTrait, ConnectionTrait, DbErr, EntityTrait, QueryOrder};

use crate::entity::{ActiveModel, Column, Entity as Users};
use crate::models::{UpdateUser, User};

/// PostgreSQL data access for users.
///
/// Borrows a connection or an open transaction; the caller owns the
/// transaction boundary.
pub struct PgUserRepository<'c, C: ConnectionTrait> {
    conn: &'c C,
}

impl<'c, C: ConnectionTrait> PgUserRepository<'c, C> {
    pub fn new(conn: &'c C) -> Self {
        Self { conn }
    }

    /// Insert a new user row. Id and timestamps come from the database.
    pub async fn create(
        &self,
        name: String,
        surname: String,
        hashed_password: String,
    ) -> Result<User, DbErr> {
        let row = ActiveModel {
            id: NotSet,
            name: Set(name),
            surname: Set(surname),
            hashed_password: Set(hashed_password),
            created_at: NotSet,
            updated_at: NotSet,
        }
        .insert(self.conn)
        .await?;

        Ok(row.into())
    }

    pub async fn get_by_id(&self, user_id: i64) -> Result<Option<User>, DbErr> {
        let row = Users::find_by_id(user_id).one(self.conn).await?;
        Ok(row.map(User::from))
    }

    pub async fn get_all(&self) -> Result<Vec<User>, DbErr> {
        let rows = Users::find()
            .order_by_asc(Column::Id)
            .all(self.conn)
            .await?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    /// Apply the supplied fields to an existing row.
    ///
    /// Returns `None` when the row disappeared between lookup and update.
    pub async fn update(&self, user_id: i64, changes: &UpdateUser) -> Result<Option<User>, DbErr> {
        let mut row = ActiveModel {
            id: Set(user_id),
            ..Default::default()
        };
        if let Some(name) = &changes.name {
            row.name = Set(name.clone());
        }
        if let Some(surname) = &changes.surname {
            row.surname = Set(surname.clone());
        }
        if let Some(hashed_password) = &changes.hashed_password {
            row.hashed_password = Set(hashed_password.clone());
        }

        match row.update(self.conn).await {
            Ok(model) => Ok(Some(model.into())),
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Delete a user row, returning the deleted id when a row was removed.
    pub async fn delete(&self, user_id: i64) -> Result<Option<i64>, DbErr> {
        let result = Users::delete_by_id(user_id).exec(self.conn).await?;
        Ok((result.rows_affected > 0).then_some(user_id))
    }
}
