use super::*;

#[test]
fn login_response_parses_and_becomes_grant() {
    let body = r#"{
        "token": "tok-7",
        "user": { "id": "u7", "name": "Luis", "email": "luis@example.com", "role": "Organizador" }
    }"#;
    let parsed: LoginResponse = serde_json::from_str(body).unwrap();
    let grant = parsed.into_grant();

    assert_eq!(grant.role, Role::Organizador);
    assert_eq!(grant.identity.user_id(), "u7");
    assert_eq!(grant.identity.name(), "Luis");
    assert_eq!(grant.identity.token(), "tok-7");
}

#[test]
fn session_response_keeps_unknown_role() {
    let body = r#"{ "user": { "id": "u1", "name": "Ana", "email": "a@b.com", "role": "Taquillero" } }"#;
    let parsed: SessionResponse = serde_json::from_str(body).unwrap();
    assert_eq!(parsed.user.role, Role::Other("Taquillero".to_owned()));
}

#[test]
fn profile_missing_role_is_rejected() {
    let body = r#"{ "id": "u1", "name": "Ana", "email": "a@b.com" }"#;
    assert!(serde_json::from_str::<UserProfile>(body).is_err());
}
