//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user accounts in the database.
//! It handles account creation, lookups by id and email, partial updates, and deletion.
//! The stored password column always holds a bcrypt digest; hashing happens in the
//! service layer before parameters reach this repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::user::{CreateUserParams, UpdateUserParams};

/// Repository providing database operations for user accounts.
///
/// This struct holds a reference to the database connection and provides methods
/// for creating, reading, updating, and deleting user records.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new user account.
    ///
    /// The unique indexes on username and email reject duplicates at the
    /// store, so two concurrent registrations with the same email cannot
    /// both succeed.
    ///
    /// # Arguments
    /// - `param` - Account fields; the password is the stored digest
    ///
    /// # Returns
    /// - `Ok(Model)` - The created user row
    /// - `Err(DbErr)` - Database error, including unique constraint violations
    pub async fn insert(&self, param: CreateUserParams) -> Result<entity::user::Model, DbErr> {
        let now = Utc::now();

        entity::user::ActiveModel {
            username: ActiveValue::Set(param.username),
            email: ActiveValue::Set(param.email),
            password: ActiveValue::Set(param.password),
            is_admin: ActiveValue::Set(false),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Finds a user by id.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(id).one(self.db).await
    }

    /// Finds a user by email address.
    ///
    /// Used by registration (duplicate check) and login (credential lookup).
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - User found
    /// - `Ok(None)` - No user with that email
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_email(&self, email: &str) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Gets all user accounts, ordered alphabetically by username.
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - All user rows (empty if none exist)
    /// - `Err(DbErr)` - Database error during query
    pub async fn all(&self) -> Result<Vec<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Username)
            .all(self.db)
            .await
    }

    /// Applies a partial update to a user account.
    ///
    /// Only fields present in the parameters are modified; the admin flag is
    /// not an updatable field. `updated_at` is refreshed on every update.
    ///
    /// # Arguments
    /// - `id` - Id of the account to update
    /// - `param` - Fields to change; the password, if present, is already hashed
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The updated user row
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during lookup or update
    pub async fn update(
        &self,
        id: i32,
        param: UpdateUserParams,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        let Some(user) = entity::prelude::User::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::user::ActiveModel = user.into();

        if let Some(username) = param.username {
            active.username = ActiveValue::Set(username);
        }
        if let Some(email) = param.email {
            active.email = ActiveValue::Set(email);
        }
        if let Some(password) = param.password {
            active.password = ActiveValue::Set(password);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let updated = active.update(self.db).await?;

        Ok(Some(updated))
    }

    /// Deletes a user account by id.
    ///
    /// # Returns
    /// - `Ok(true)` - The account existed and was removed
    /// - `Ok(false)` - No user with that id
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::User::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
