//! User account business logic.
//!
//! Account reads, updates, and deletion for the owner-or-admin routes plus
//! the admin-only listing. Password changes are re-hashed here before they
//! reach the repository; the admin flag is not reachable through this path.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{UpdateUserParams, User},
    util::password,
};

/// Service providing business logic for account management.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves an account by id.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Account found, password stripped
    /// - `Ok(None)` - No account with that id
    /// - `Err(AppError)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<Option<User>, AppError> {
        let repo = UserRepository::new(self.db);

        let user = repo.find_by_id(id).await?;

        Ok(user.map(User::from_entity))
    }

    /// Retrieves all accounts, ordered by username.
    ///
    /// # Returns
    /// - `Ok(Vec<User>)` - All accounts, passwords stripped
    /// - `Err(AppError)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        let repo = UserRepository::new(self.db);

        let users = repo.all().await?;

        Ok(users.into_iter().map(User::from_entity).collect())
    }

    /// Applies a partial update to an account.
    ///
    /// A password in the update is hashed with a fresh salt before storage,
    /// so the submitted plaintext is never persisted.
    ///
    /// # Arguments
    /// - `id` - Id of the account to update
    /// - `params` - Validated update input (plaintext password, if any)
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The updated account, password stripped
    /// - `Ok(None)` - No account with that id
    /// - `Err(AppError)` - Hashing or database failure
    pub async fn update(
        &self,
        id: i32,
        mut params: UpdateUserParams,
    ) -> Result<Option<User>, AppError> {
        if let Some(plaintext) = params.password.take() {
            params.password = Some(password::hash_password(&plaintext)?);
        }

        let repo = UserRepository::new(self.db);

        let updated = repo.update(id, params).await?;

        Ok(updated.map(User::from_entity))
    }

    /// Deletes an account by id.
    ///
    /// # Returns
    /// - `Ok(true)` - The account existed and was removed
    /// - `Ok(false)` - No account with that id
    /// - `Err(AppError)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = UserRepository::new(self.db);

        let deleted = repo.delete(id).await?;

        Ok(deleted)
    }
}
