use super::*;

/// Tests admin token passes the admin permission check.
///
/// Expected: Ok(Claims) with is_admin=true
#[test]
fn grants_access_to_admin() {
    let tokens = test_tokens();
    let token = tokens.issue(1, true).unwrap();
    let headers = headers_with_token(&token);

    let claims = AuthGuard::new(&tokens, &headers)
        .require(&[Permission::Admin])
        .unwrap();

    assert_eq!(claims.id, "1");
    assert!(claims.is_admin);
}

/// Tests non-admin token is denied the admin permission.
///
/// Expected: Err(AuthError::AccessDenied)
#[test]
fn denies_access_to_non_admin() {
    let tokens = test_tokens();
    let token = tokens.issue(2, false).unwrap();
    let headers = headers_with_token(&token);

    let result = AuthGuard::new(&tokens, &headers).require(&[Permission::Admin]);

    match result.unwrap_err() {
        AppError::AuthErr(AuthError::AccessDenied(message)) => {
            assert_eq!(message, "You are not allowed to do that");
        }
        e => panic!("Expected AccessDenied error, got: {:?}", e),
    }
}

/// Tests unauthenticated request is denied the admin permission.
///
/// The missing-token case takes precedence over any permission outcome.
///
/// Expected: Err(AuthError::MissingToken)
#[test]
fn denies_access_when_not_authenticated() {
    let tokens = test_tokens();
    let headers = HeaderMap::new();

    let result = AuthGuard::new(&tokens, &headers).require(&[Permission::Admin]);

    match result.unwrap_err() {
        AppError::AuthErr(AuthError::MissingToken) => {}
        e => panic!("Expected MissingToken error, got: {:?}", e),
    }
}
