use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// User account as returned by the API.
///
/// There is deliberately no password field on this type; the stored digest
/// never crosses the controller boundary.
#[derive(Serialize, Deserialize, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Registration request body.
///
/// Fields are optional at the deserialization layer so that missing fields
/// reach the input validator and produce a 400 with a first-violation
/// message instead of a body-rejection status.
#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct RegisterUserDto {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Login request body.
#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct LoginUserDto {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Partial account update request body. All fields optional.
#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct UpdateUserDto {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Successful login response body.
#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct LoginResponseDto {
    pub message: String,
    pub token: String,
    pub user: UserDto,
}
