use axum::{
    extract::State,
    http::{HeaderMap, HeaderValue, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        user::{LoginResponseDto, LoginUserDto, RegisterUserDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::auth::AUTH_TOKEN_HEADER,
        service::auth::AuthService,
        state::AppState,
        util::validate::{validate_login, validate_register},
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

#[utoipa::path(
    post,
    path = "/api/user/register",
    tag = AUTH_TAG,
    request_body = RegisterUserDto,
    responses(
        (status = 201, description = "Account created", body = UserDto),
        (status = 400, description = "Invalid payload or email already registered", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = validate_register(&payload).map_err(AppError::BadRequest)?;

    let service = AuthService::new(&state.db, &state.tokens);

    let user = service.register(params).await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

#[utoipa::path(
    post,
    path = "/api/user/login",
    tag = AUTH_TAG,
    request_body = LoginUserDto,
    responses(
        (status = 200, description = "Logged in; the token is also set on the auth-token response header", body = LoginResponseDto),
        (status = 400, description = "Invalid payload, unknown email, or wrong password", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = validate_login(&payload).map_err(AppError::BadRequest)?;

    let service = AuthService::new(&state.db, &state.tokens);

    let (token, user) = service.login(params).await?;

    // The token rides on the response header as well as in the body
    let mut headers = HeaderMap::new();
    headers.insert(
        AUTH_TOKEN_HEADER,
        HeaderValue::from_str(&token)
            .map_err(|e| AppError::InternalError(format!("Token is not a valid header: {}", e)))?,
    );

    Ok((
        StatusCode::OK,
        headers,
        Json(LoginResponseDto {
            message: "Login successful".to_string(),
            token,
            user: user.into_dto(),
        }),
    ))
}
