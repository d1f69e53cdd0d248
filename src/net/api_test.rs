use futures::executor::block_on;

use super::*;

// =============================================================
// Status mapping
// =============================================================

#[test]
fn bearer_formats_authorization_header() {
    assert_eq!(bearer("tok-1"), "Bearer tok-1");
}

#[test]
fn login_rejections_are_invalid_credentials() {
    for status in [400, 401, 403] {
        assert_eq!(login_failure(status), AuthError::InvalidCredentials);
    }
}

#[test]
fn login_server_errors_are_unexpected() {
    assert_eq!(
        login_failure(500),
        AuthError::UnexpectedResponse("login failed: 500".to_owned())
    );
}

#[test]
fn restore_verdict_distinguishes_rejection_from_failure() {
    assert_eq!(restore_verdict(200), Ok(true));
    assert_eq!(restore_verdict(401), Ok(false));
    assert_eq!(restore_verdict(403), Ok(false));
    assert_eq!(
        restore_verdict(502),
        Err(AuthError::UnexpectedResponse("session check failed: 502".to_owned()))
    );
}

// =============================================================
// Non-browser stubs
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn server_side_backend_reports_network_failure() {
    let backend = HttpAuthBackend::new(AuthConfig::default());
    let login = block_on(backend.login(&Credentials::new("a@b.com", "pw")));
    let restore = block_on(backend.restore("tok-1"));

    assert!(matches!(login, Err(AuthError::NetworkFailure(_))));
    assert!(matches!(restore, Err(AuthError::NetworkFailure(_))));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn server_side_logout_is_noop() {
    block_on(logout(&AuthConfig::default(), "tok-1"));
}
