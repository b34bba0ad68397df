//! Input validation for account payloads.
//!
//! Pure functions mapping a request body to validated operation parameters or
//! the first violated constraint's message. Registration and login bodies
//! deserialize with optional fields so that missing values surface here as a
//! 400 with a clear message rather than a body-rejection status.

use crate::{
    model::user::{LoginUserDto, RegisterUserDto, UpdateUserDto},
    server::model::user::{LoginUserParams, RegisterUserParams, UpdateUserParams},
};

/// Validates a registration payload.
///
/// Requires a username (1-255 chars), an email (6-255 chars, valid shape),
/// and a password (6-1024 chars).
///
/// # Returns
/// - `Ok(RegisterUserParams)` - Validated registration input
/// - `Err(String)` - Message for the first violated constraint
pub fn validate_register(payload: &RegisterUserDto) -> Result<RegisterUserParams, String> {
    let username = required(payload.username.as_deref(), "username")?;
    check_length(username, "username", 1, 255)?;

    let email = required(payload.email.as_deref(), "email")?;
    check_length(email, "email", 6, 255)?;
    check_email(email)?;

    let password = required(payload.password.as_deref(), "password")?;
    check_length(password, "password", 6, 1024)?;

    Ok(RegisterUserParams {
        username: username.to_string(),
        email: email.to_string(),
        password: password.to_string(),
    })
}

/// Validates a login payload.
///
/// Requires an email (1-255 chars, valid shape) and a password (6-1024 chars).
///
/// # Returns
/// - `Ok(LoginUserParams)` - Validated login input
/// - `Err(String)` - Message for the first violated constraint
pub fn validate_login(payload: &LoginUserDto) -> Result<LoginUserParams, String> {
    let email = required(payload.email.as_deref(), "email")?;
    check_length(email, "email", 1, 255)?;
    check_email(email)?;

    let password = required(payload.password.as_deref(), "password")?;
    check_length(password, "password", 6, 1024)?;

    Ok(LoginUserParams {
        email: email.to_string(),
        password: password.to_string(),
    })
}

/// Validates a partial account update payload.
///
/// Every field is optional; present fields are held to the same constraints
/// as at registration. The admin flag is not part of the payload type, so it
/// can never be changed through this path.
///
/// # Returns
/// - `Ok(UpdateUserParams)` - Validated update input
/// - `Err(String)` - Message for the first violated constraint
pub fn validate_update(payload: &UpdateUserDto) -> Result<UpdateUserParams, String> {
    if let Some(username) = payload.username.as_deref() {
        check_length(username, "username", 1, 255)?;
    }

    if let Some(email) = payload.email.as_deref() {
        check_length(email, "email", 6, 255)?;
        check_email(email)?;
    }

    if let Some(password) = payload.password.as_deref() {
        check_length(password, "password", 6, 1024)?;
    }

    Ok(UpdateUserParams {
        username: payload.username.clone(),
        email: payload.email.clone(),
        password: payload.password.clone(),
    })
}

fn required<'a>(value: Option<&'a str>, field: &str) -> Result<&'a str, String> {
    value.ok_or_else(|| format!("{} is required", field))
}

fn check_length(value: &str, field: &str, min: usize, max: usize) -> Result<(), String> {
    let length = value.chars().count();

    if length < min {
        return Err(format!("{} must be at least {} characters", field, min));
    }

    if length > max {
        return Err(format!("{} must be at most {} characters", field, max));
    }

    Ok(())
}

fn check_email(value: &str) -> Result<(), String> {
    let valid = match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    };

    if valid {
        Ok(())
    } else {
        Err("email must be a valid email".to_string())
    }
}
