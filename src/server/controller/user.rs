use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        user::{UpdateUserDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::user::UserService,
        state::AppState,
        util::validate::validate_update,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Get an account by id.
///
/// Returns the account without its password. Accessible to the account owner
/// and to admins.
///
/// # Access Control
/// - `OwnerOrAdmin` - The token subject must match the route id, or carry the admin flag
///
/// # Returns
/// - `200 OK` - The account
/// - `400 Bad Request` - Invalid token
/// - `401 Unauthorized` - Missing token
/// - `403 Forbidden` - Authenticated but neither owner nor admin
/// - `404 Not Found` - No account with that id
#[utoipa::path(
    get,
    path = "/api/user/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "Account id")
    ),
    responses(
        (status = 200, description = "The account", body = UserDto),
        (status = 400, description = "Invalid token", body = ErrorDto),
        (status = 401, description = "Missing token", body = ErrorDto),
        (status = 403, description = "Not the owner and not an admin", body = ErrorDto),
        (status = 404, description = "Account not found", body = ErrorDto)
    ),
)]
pub async fn get_user_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let subject = id.to_string();
    let _claims = AuthGuard::new(&state.tokens, &headers)
        .require(&[Permission::OwnerOrAdmin(&subject)])?;

    let service = UserService::new(&state.db);

    match service.get_by_id(id).await? {
        Some(user) => Ok((StatusCode::OK, Json(user.into_dto()))),
        None => Err(AppError::NotFound("User not found".to_string())),
    }
}

/// Update an account.
///
/// Applies a partial update to username, email, and password. A submitted
/// password is re-hashed before storage and never echoed back. The admin
/// flag cannot be changed through this endpoint.
///
/// # Access Control
/// - `OwnerOrAdmin` - The token subject must match the route id, or carry the admin flag
///
/// # Returns
/// - `200 OK` - The updated account
/// - `400 Bad Request` - Invalid payload or invalid token
/// - `401 Unauthorized` - Missing token
/// - `403 Forbidden` - Authenticated but neither owner nor admin
/// - `404 Not Found` - No account with that id
#[utoipa::path(
    put,
    path = "/api/user/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "Account id")
    ),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "The updated account", body = UserDto),
        (status = 400, description = "Invalid payload or invalid token", body = ErrorDto),
        (status = 401, description = "Missing token", body = ErrorDto),
        (status = 403, description = "Not the owner and not an admin", body = ErrorDto),
        (status = 404, description = "Account not found", body = ErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    headers: HeaderMap,
    Json(payload): Json<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let subject = id.to_string();
    let _claims = AuthGuard::new(&state.tokens, &headers)
        .require(&[Permission::OwnerOrAdmin(&subject)])?;

    let params = validate_update(&payload).map_err(AppError::BadRequest)?;

    let service = UserService::new(&state.db);

    match service.update(id, params).await? {
        Some(user) => Ok((StatusCode::OK, Json(user.into_dto()))),
        None => Err(AppError::NotFound("User not found".to_string())),
    }
}

/// Delete an account.
///
/// # Access Control
/// - `OwnerOrAdmin` - The token subject must match the route id, or carry the admin flag
///
/// # Returns
/// - `200 OK` - Confirmation message
/// - `400 Bad Request` - Invalid token
/// - `401 Unauthorized` - Missing token
/// - `403 Forbidden` - Authenticated but neither owner nor admin
/// - `404 Not Found` - No account with that id
#[utoipa::path(
    delete,
    path = "/api/user/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "Account id")
    ),
    responses(
        (status = 200, description = "Account deleted", body = MessageDto),
        (status = 400, description = "Invalid token", body = ErrorDto),
        (status = 401, description = "Missing token", body = ErrorDto),
        (status = 403, description = "Not the owner and not an admin", body = ErrorDto),
        (status = 404, description = "Account not found", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let subject = id.to_string();
    let _claims = AuthGuard::new(&state.tokens, &headers)
        .require(&[Permission::OwnerOrAdmin(&subject)])?;

    let service = UserService::new(&state.db);

    if service.delete(id).await? {
        Ok((
            StatusCode::OK,
            Json(MessageDto {
                message: "User deleted successfully".to_string(),
            }),
        ))
    } else {
        Err(AppError::NotFound("User not found".to_string()))
    }
}

/// List all accounts.
///
/// Returns every account without passwords. Admin only.
///
/// # Access Control
/// - `Admin` - Only admins can list accounts
///
/// # Returns
/// - `200 OK` - All accounts
/// - `400 Bad Request` - Invalid token
/// - `401 Unauthorized` - Missing token
/// - `403 Forbidden` - Authenticated but not an admin
#[utoipa::path(
    get,
    path = "/api/user",
    tag = USER_TAG,
    responses(
        (status = 200, description = "All accounts", body = Vec<UserDto>),
        (status = 400, description = "Invalid token", body = ErrorDto),
        (status = 401, description = "Missing token", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto)
    ),
)]
pub async fn get_all_users(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _claims = AuthGuard::new(&state.tokens, &headers).require(&[Permission::Admin])?;

    let service = UserService::new(&state.db);

    let users = service.get_all().await?;

    let users_dto: Vec<_> = users.into_iter().map(|u| u.into_dto()).collect();

    Ok((StatusCode::OK, Json(users_dto)))
}
