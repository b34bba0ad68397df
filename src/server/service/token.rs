//! Access token issuing and verification.
//!
//! Tokens are signed JWTs carrying the account id (as a string), the admin
//! flag, and issued-at/expiry claims. The signing secret is provided at
//! construction; nothing here reads the environment.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::server::error::auth::AuthError;

/// Decoded access token claims.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Account id of the token subject, carried as a string.
    pub id: String,
    /// Whether the subject has admin privileges.
    #[serde(rename = "isAdmin")]
    pub is_admin: bool,
    /// Issued-at (unix timestamp).
    pub iat: i64,
    /// Expiry (unix timestamp).
    pub exp: i64,
}

/// Issues and verifies signed, time-limited access tokens.
///
/// Constructed once at startup from the configured secret and stored in
/// `AppState`. Cloning shares the derived keys.
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validity: Duration,
}

impl TokenService {
    /// Creates a token service with the production validity of one day.
    ///
    /// # Arguments
    /// - `secret` - Symmetric signing secret
    pub fn new(secret: &str) -> Self {
        Self::with_validity(secret, Duration::days(1))
    }

    /// Creates a token service with an explicit validity window.
    ///
    /// Tests use short windows (one hour, or negative to mint
    /// already-expired tokens).
    pub fn with_validity(secret: &str, validity: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validity,
        }
    }

    /// Issues a signed token for the given account.
    ///
    /// # Arguments
    /// - `user_id` - Account id to embed as the token subject
    /// - `is_admin` - Admin flag to embed
    ///
    /// # Returns
    /// - `Ok(String)` - Signed token expiring `validity` from now
    /// - `Err(AuthError::TokenCreation)` - Signing failed
    pub fn issue(&self, user_id: i32, is_admin: bool) -> Result<String, AuthError> {
        let now = Utc::now();
        let claims = Claims {
            id: user_id.to_string(),
            is_admin,
            iat: now.timestamp(),
            exp: (now + self.validity).timestamp(),
        };

        Ok(encode(&Header::default(), &claims, &self.encoding)?)
    }

    /// Verifies a token and returns its claims.
    ///
    /// A bad signature, malformed input, and an expired token all collapse
    /// into the same error; callers cannot distinguish why verification
    /// failed.
    ///
    /// # Returns
    /// - `Ok(Claims)` - Token is authentic and unexpired
    /// - `Err(AuthError::InvalidToken)` - Verification failed
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(token, &self.decoding, &Validation::default())
            .map(|data| data.claims)
            .map_err(|_| AuthError::InvalidToken)
    }
}
