//! Token-based access guard for protected routes.
//!
//! Handlers construct an `AuthGuard` from the shared token service and the
//! request headers, then state their requirements as a permission slice. The
//! guard reads the token from the `auth-token` header (a custom header, not a
//! bearer scheme), verifies it, and checks every requested permission against
//! the decoded claims. On success the claims are handed back to the handler
//! as an explicit value.

use axum::http::HeaderMap;

use crate::server::{
    error::{auth::AuthError, AppError},
    service::token::{Claims, TokenService},
};

/// Request header carrying the access token.
pub const AUTH_TOKEN_HEADER: &str = "auth-token";

pub enum Permission<'a> {
    /// Requires the admin flag on the token.
    Admin,
    /// Requires the token subject to match the given route id, or the admin
    /// flag. The ids are compared as text.
    OwnerOrAdmin(&'a str),
}

pub struct AuthGuard<'a> {
    tokens: &'a TokenService,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(tokens: &'a TokenService, headers: &'a HeaderMap) -> Self {
        Self { tokens, headers }
    }

    /// Checks the request against the required permissions.
    ///
    /// A missing token fails closed with a 401; a token that does not verify
    /// (malformed, bad signature, or expired) fails closed with a 400; an
    /// authenticated caller lacking a required permission fails with a 403.
    /// An empty permission slice requires authentication only.
    ///
    /// # Arguments
    /// - `permissions` - Every permission the route requires
    ///
    /// # Returns
    /// - `Ok(Claims)` - Decoded claims of the authenticated caller
    /// - `Err(AppError::AuthErr)` - Missing token, invalid token, or denied access
    pub fn require(&self, permissions: &[Permission]) -> Result<Claims, AppError> {
        let Some(token) = self
            .headers
            .get(AUTH_TOKEN_HEADER)
            .and_then(|value| value.to_str().ok())
        else {
            return Err(AuthError::MissingToken.into());
        };

        let claims = self.tokens.verify(token)?;

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !claims.is_admin {
                        return Err(AuthError::AccessDenied(
                            "You are not allowed to do that".to_string(),
                        )
                        .into());
                    }
                }
                Permission::OwnerOrAdmin(subject_id) => {
                    if claims.id != *subject_id && !claims.is_admin {
                        return Err(AuthError::AccessDenied(
                            "Access Denied - Not allowed".to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(claims)
    }
}
