use std::rc::Rc;

use futures::executor::block_on;

use super::*;
use crate::session::backend::MemoryTokenStore;
use crate::session::testing::{MockBackend, grant, record};

fn provider(backend: MockBackend, tokens: MemoryTokenStore) -> (AuthProvider, Rc<MockBackend>) {
    let backend = Rc::new(backend);
    let provider = AuthProvider::new(backend.clone(), Rc::new(tokens));
    (provider, backend)
}

#[test]
fn new_provider_starts_initializing() {
    let (provider, _backend) = provider(MockBackend::new(), MemoryTokenStore::default());
    assert_eq!(provider.snapshot(), Session::Initializing);
}

#[test]
fn boot_restores_exactly_once() {
    let backend = MockBackend::new().restoring(Ok(Some(grant("Administrador", "tok-1"))));
    let (provider, backend) = provider(backend, MemoryTokenStore::with_token("tok-1"));
    let (seen, _sub) = record(&provider.reader());

    assert_eq!(block_on(provider.boot()), SessionStatus::Authenticated);
    assert_eq!(block_on(provider.boot()), SessionStatus::Authenticated);

    assert_eq!(backend.restore_calls.get(), 1);
    assert_eq!(*seen.borrow(), vec![SessionStatus::Authenticated]);
}

#[test]
fn clones_share_one_session() {
    let backend = MockBackend::new().accepting_login("Organizador", "tok-2");
    let (provider, _backend) = provider(backend, MemoryTokenStore::default());
    let other = provider.clone();
    block_on(provider.boot());

    block_on(other.login(&Credentials::new("a@b.com", "pw"))).unwrap();
    assert_eq!(provider.snapshot().role(), Some(&Role::Organizador));

    assert!(provider.logout());
    assert_eq!(other.snapshot(), Session::Unauthenticated);
}

#[test]
fn boot_on_clone_does_not_restore_again() {
    let (provider, backend) = provider(MockBackend::new(), MemoryTokenStore::with_token("tok-1"));
    block_on(provider.boot());
    block_on(provider.clone().boot());
    assert_eq!(backend.restore_calls.get(), 1);
}

#[test]
fn expire_ends_session_for_every_clone_once() {
    let backend = MockBackend::new().restoring(Ok(Some(grant("Organizador", "tok-1"))));
    let (provider, _backend) = provider(backend, MemoryTokenStore::with_token("tok-1"));
    let other = provider.clone();
    block_on(provider.boot());
    let (seen, _sub) = record(&provider.reader());

    assert!(other.expire());
    assert!(!provider.expire());

    assert_eq!(provider.snapshot(), Session::Unauthenticated);
    assert_eq!(*seen.borrow(), vec![SessionStatus::Unauthenticated]);
}
