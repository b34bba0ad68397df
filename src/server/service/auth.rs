//! Registration and login business logic.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{CreateUserParams, LoginUserParams, RegisterUserParams, User},
    service::token::TokenService,
    util::password,
};

/// Service handling account registration and credential login.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService) -> Self {
        Self { db, tokens }
    }

    /// Registers a new account.
    ///
    /// Rejects emails that are already registered, hashes the password with a
    /// fresh salt, and persists the account. The unique index on the email
    /// column backs up the lookup, so a concurrent registration with the same
    /// email fails at the store instead of slipping through.
    ///
    /// # Arguments
    /// - `params` - Validated registration input (plaintext password)
    ///
    /// # Returns
    /// - `Ok(User)` - The created account, without the password
    /// - `Err(AppError::BadRequest)` - Email already registered
    /// - `Err(AppError)` - Hashing or database failure
    pub async fn register(&self, params: RegisterUserParams) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        if repo.find_by_email(&params.email).await?.is_some() {
            return Err(AppError::BadRequest("Email already exists".to_string()));
        }

        let digest = password::hash_password(&params.password)?;

        let created = repo
            .insert(CreateUserParams {
                username: params.username,
                email: params.email,
                password: digest,
            })
            .await?;

        Ok(User::from_entity(created))
    }

    /// Logs a user in with email and password.
    ///
    /// An unknown email and a wrong password produce distinct messages but
    /// the same status, matching the documented API behavior.
    ///
    /// # Arguments
    /// - `params` - Validated login input
    ///
    /// # Returns
    /// - `Ok((token, User))` - Signed access token and the account, without the password
    /// - `Err(AppError::BadRequest)` - Unknown email or wrong password
    /// - `Err(AppError)` - Signing or database failure
    pub async fn login(&self, params: LoginUserParams) -> Result<(String, User), AppError> {
        let repo = UserRepository::new(self.db);

        let Some(user) = repo.find_by_email(&params.email).await? else {
            return Err(AppError::BadRequest("Email is not found".to_string()));
        };

        if !password::verify_password(&params.password, &user.password) {
            return Err(AppError::BadRequest("Invalid password".to_string()));
        }

        let token = self.tokens.issue(user.id, user.is_admin)?;

        Ok((token, User::from_entity(user)))
    }
}
