//! User domain models and parameters.
//!
//! Provides the domain model for user accounts plus parameter types for
//! registration, login, and update operations. The domain model carries no
//! password field; the stored digest is dropped when converting from the
//! entity model, so it cannot leak into any response.

use chrono::{DateTime, Utc};

use crate::model::user::UserDto;

/// User account with identity, contact details, and admin flag.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Store-assigned account id.
    pub id: i32,
    /// Unique display name.
    pub username: String,
    /// Unique contact address, also the login identifier.
    pub email: String,
    /// Whether the user has admin privileges.
    pub is_admin: bool,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
    /// When the account was last modified.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            email: self.email,
            is_admin: self.is_admin,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// The stored password digest is discarded here.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            email: entity.email,
            is_admin: entity.is_admin,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Validated registration input. The password is still plaintext at this
/// point; the auth service hashes it before anything is persisted.
#[derive(Debug, Clone)]
pub struct RegisterUserParams {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Validated login input.
#[derive(Debug, Clone)]
pub struct LoginUserParams {
    pub email: String,
    pub password: String,
}

/// Parameters for inserting a user row. The password holds the bcrypt digest.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Parameters for a partial account update.
///
/// `None` fields are left untouched. The admin flag is deliberately absent:
/// it cannot be changed through the generic update path.
#[derive(Debug, Clone)]
pub struct UpdateUserParams {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}
