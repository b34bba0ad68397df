use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No token was supplied on a protected route.
    ///
    /// The `auth-token` request header is absent. Results in a 401
    /// Unauthorized response.
    #[error("Access Denied")]
    MissingToken,

    /// The supplied token failed verification.
    ///
    /// Covers malformed tokens, invalid signatures, and expired tokens alike.
    /// Results in a 400 Bad Request response; the status differs from the
    /// missing-token case and is part of the documented API behavior.
    #[error("Invalid Token")]
    InvalidToken,

    /// The caller is authenticated but not permitted to perform the operation.
    ///
    /// Results in a 403 Forbidden response carrying the route-specific message.
    #[error("{0}")]
    AccessDenied(String),

    /// Signing a new token failed.
    ///
    /// Results in a 400 Bad Request response carrying the underlying message.
    #[error("{0}")]
    TokenCreation(#[from] jsonwebtoken::errors::Error),
}

/// Converts authentication errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `InvalidToken` and `TokenCreation`
/// - 401 Unauthorized - For `MissingToken`
/// - 403 Forbidden - For `AccessDenied`
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::MissingToken => StatusCode::UNAUTHORIZED,
            Self::InvalidToken | Self::TokenCreation(_) => StatusCode::BAD_REQUEST,
            Self::AccessDenied(_) => StatusCode::FORBIDDEN,
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
