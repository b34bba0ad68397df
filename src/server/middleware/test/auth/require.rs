use super::*;

mod require_admin;

/// Tests a request without a token fails closed.
///
/// Verifies that the guard rejects a request whose headers carry no
/// auth-token at all, before any permission is evaluated.
///
/// Expected: Err(AuthError::MissingToken)
#[test]
fn missing_token_fails_closed() {
    let tokens = test_tokens();
    let headers = HeaderMap::new();

    let result = AuthGuard::new(&tokens, &headers).require(&[]);

    match result.unwrap_err() {
        AppError::AuthErr(AuthError::MissingToken) => {}
        e => panic!("Expected MissingToken error, got: {:?}", e),
    }
}

/// Tests a malformed token is rejected.
///
/// Expected: Err(AuthError::InvalidToken)
#[test]
fn garbage_token_is_invalid() {
    let tokens = test_tokens();
    let headers = headers_with_token("not-a-token");

    let result = AuthGuard::new(&tokens, &headers).require(&[]);

    match result.unwrap_err() {
        AppError::AuthErr(AuthError::InvalidToken) => {}
        e => panic!("Expected InvalidToken error, got: {:?}", e),
    }
}

/// Tests an expired token is rejected.
///
/// Mints a token whose expiry lies a day in the past; verification must
/// fail exactly like a malformed token.
///
/// Expected: Err(AuthError::InvalidToken)
#[test]
fn expired_token_is_invalid() {
    let expired_issuer = TokenService::with_validity(TEST_SECRET, Duration::days(-1));
    let token = expired_issuer.issue(1, false).unwrap();

    let tokens = test_tokens();
    let headers = headers_with_token(&token);

    let result = AuthGuard::new(&tokens, &headers).require(&[]);

    match result.unwrap_err() {
        AppError::AuthErr(AuthError::InvalidToken) => {}
        e => panic!("Expected InvalidToken error, got: {:?}", e),
    }
}

/// Tests a token signed with a different secret is rejected.
///
/// Expected: Err(AuthError::InvalidToken)
#[test]
fn token_from_other_secret_is_invalid() {
    let other_issuer = TokenService::with_validity("some-other-secret", Duration::hours(1));
    let token = other_issuer.issue(1, true).unwrap();

    let tokens = test_tokens();
    let headers = headers_with_token(&token);

    let result = AuthGuard::new(&tokens, &headers).require(&[]);

    match result.unwrap_err() {
        AppError::AuthErr(AuthError::InvalidToken) => {}
        e => panic!("Expected InvalidToken error, got: {:?}", e),
    }
}

/// Tests a tampered token is rejected.
///
/// Appending to the signature section invalidates the token even though the
/// claims sections are intact.
///
/// Expected: Err(AuthError::InvalidToken)
#[test]
fn tampered_token_is_invalid() {
    let tokens = test_tokens();
    let mut token = tokens.issue(1, false).unwrap();
    token.push('x');

    let headers = headers_with_token(&token);

    let result = AuthGuard::new(&tokens, &headers).require(&[]);

    match result.unwrap_err() {
        AppError::AuthErr(AuthError::InvalidToken) => {}
        e => panic!("Expected InvalidToken error, got: {:?}", e),
    }
}

/// Tests an empty permission list requires authentication only.
///
/// Any holder of a valid token passes, and the decoded claims are handed
/// back to the caller.
///
/// Expected: Ok(Claims) matching the issued identity
#[test]
fn empty_permission_list_requires_authentication_only() {
    let tokens = test_tokens();
    let token = tokens.issue(7, false).unwrap();
    let headers = headers_with_token(&token);

    let claims = AuthGuard::new(&tokens, &headers).require(&[]).unwrap();

    assert_eq!(claims.id, "7");
    assert!(!claims.is_admin);
}

/// Tests that every permission in the slice is checked.
///
/// An owner match on one permission does not excuse a missing admin flag on
/// another.
///
/// Expected: Err(AuthError::AccessDenied) for the failing permission
#[test]
fn fails_if_any_permission_missing() {
    let tokens = test_tokens();
    let token = tokens.issue(42, false).unwrap();
    let headers = headers_with_token(&token);

    let result = AuthGuard::new(&tokens, &headers)
        .require(&[Permission::OwnerOrAdmin("42"), Permission::Admin]);

    match result.unwrap_err() {
        AppError::AuthErr(AuthError::AccessDenied(_)) => {}
        e => panic!("Expected AccessDenied error, got: {:?}", e),
    }
}
