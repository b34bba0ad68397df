//! Credential hashing.
//!
//! Wraps bcrypt with the application's fixed cost factor. Every call to
//! `hash_password` draws a fresh random salt, so hashing the same plaintext
//! twice yields different digests.

use bcrypt::BcryptError;

/// Bcrypt cost factor used for all stored credentials.
const HASH_COST: u32 = 10;

/// Hashes a plaintext password with a fresh random salt.
///
/// # Arguments
/// - `plaintext` - The password to hash
///
/// # Returns
/// - `Ok(String)` - Salted bcrypt digest suitable for storage
/// - `Err(BcryptError)` - Hashing failed
pub fn hash_password(plaintext: &str) -> Result<String, BcryptError> {
    bcrypt::hash(plaintext, HASH_COST)
}

/// Checks a plaintext password against a stored digest.
///
/// A malformed digest reports `false` rather than failing hard, so a
/// corrupted stored value behaves like a wrong password at the login
/// boundary.
///
/// # Arguments
/// - `plaintext` - The candidate password
/// - `digest` - The stored bcrypt digest
///
/// # Returns
/// - `true` - The password matches the digest
/// - `false` - Wrong password or unusable digest
pub fn verify_password(plaintext: &str, digest: &str) -> bool {
    bcrypt::verify(plaintext, digest).unwrap_or(false)
}
