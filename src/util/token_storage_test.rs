#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn load_is_none_in_non_hydrate_tests() {
    let store = BrowserTokenStore::new("storefront_session_token");
    assert_eq!(store.load(), None);
}

#[test]
fn save_and_clear_are_noops_but_callable() {
    let store = BrowserTokenStore::new("k");
    store.save("tok-1");
    assert_eq!(store.load(), None);
    store.clear();
}
