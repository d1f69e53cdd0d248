use super::*;
use crate::session::{Identity, Role};

#[test]
fn greeting_names_user_and_role() {
    let session = Session::Authenticated {
        role: Role::Organizador,
        identity: Identity::new("u1".to_owned(), "Ana".to_owned(), "a@b.com".to_owned(), "t".to_owned()),
    };
    assert_eq!(greeting(&session).as_deref(), Some("Ana · Organizador"));
}

#[test]
fn no_greeting_without_session() {
    assert_eq!(greeting(&Session::Initializing), None);
    assert_eq!(greeting(&Session::Unauthenticated), None);
}
