use super::*;

#[test]
fn display_includes_cause() {
    let err = AuthError::NetworkFailure("connection refused".to_owned());
    assert_eq!(err.to_string(), "network failure: connection refused");
    assert_eq!(AuthError::InvalidCredentials.to_string(), "invalid credentials");
}

#[test]
fn transport_failures_share_a_user_message() {
    let network = AuthError::NetworkFailure("x".to_owned()).user_message();
    let unexpected = AuthError::UnexpectedResponse("y".to_owned()).user_message();
    assert_eq!(network, unexpected);
    assert_ne!(network, AuthError::InvalidCredentials.user_message());
}
