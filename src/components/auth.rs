//! Leptos wiring for the session provider.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ProvideAuth` builds the one `AuthProvider` for the application, mirrors
//! every session transition into a signal so views can react to it, and
//! starts the boot-time restore on the client. Pages reach all of it through
//! [`use_auth`].

use std::rc::Rc;

use leptos::prelude::*;

use crate::config::AuthConfig;
use crate::net::api::HttpAuthBackend;
use crate::session::{AuthProvider, Session};
use crate::util::token_storage::BrowserTokenStore;

/// Shared auth handle provided via context.
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// Current session; read-only to consumers.
    pub session: ReadSignal<Session>,
    provider: StoredValue<AuthProvider, LocalStorage>,
    config: StoredValue<AuthConfig>,
}

impl AuthContext {
    pub fn provider(&self) -> AuthProvider {
        self.provider.get_value()
    }

    pub fn config(&self) -> AuthConfig {
        self.config.get_value()
    }
}

/// Fetch the [`AuthContext`] installed by [`ProvideAuth`].
pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}

/// Owns the application's session for the lifetime of the app.
#[component]
pub fn ProvideAuth(children: Children) -> impl IntoView {
    let config = AuthConfig::from_build_env();
    let provider = AuthProvider::new(
        Rc::new(HttpAuthBackend::new(config.clone())),
        Rc::new(BrowserTokenStore::new(config.storage_key.clone())),
    );

    let (session, set_session) = signal(provider.snapshot());
    let subscription = provider
        .reader()
        .subscribe(move |next: &Session| set_session.set(next.clone()));
    // Lives as long as this component's owner.
    let _ = StoredValue::new_local(subscription);

    provide_context(AuthContext {
        session,
        provider: StoredValue::new_local(provider.clone()),
        config: StoredValue::new(config),
    });

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let status = provider.boot().await;
        log::debug!("session resolved: {status:?}");
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = provider;

    children()
}
