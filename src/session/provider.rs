//! Application-lifetime owner of the session store.
//!
//! SYSTEM CONTEXT
//! ==============
//! Built once at application boot by the `AuthProvider` component, which
//! hands it to the rest of the UI through context. Pages get a
//! `SessionReader` or call `login`/`logout`; nothing else can touch the
//! session.

#[cfg(test)]
#[path = "provider_test.rs"]
mod provider_test;

use std::cell::Cell;
use std::rc::Rc;

use super::backend::{AuthBackend, TokenStore};
use super::model::{Credentials, Role, Session, SessionStatus};
use super::store::{SessionReader, SessionStore};
use crate::error::AuthError;

#[derive(Clone)]
pub struct AuthProvider {
    store: SessionStore,
    booted: Rc<Cell<bool>>,
}

impl AuthProvider {
    pub fn new(backend: Rc<dyn AuthBackend>, tokens: Rc<dyn TokenStore>) -> Self {
        Self { store: SessionStore::new(backend, tokens), booted: Rc::new(Cell::new(false)) }
    }

    /// Restore the persisted session. Only the first call does anything.
    pub async fn boot(&self) -> SessionStatus {
        if self.booted.replace(true) {
            log::debug!("auth provider already booted");
            return self.store.status();
        }
        log::debug!("auth provider booting; restoring session");
        self.store.restore().await
    }

    #[must_use]
    pub fn snapshot(&self) -> Session {
        self.store.snapshot()
    }

    #[must_use]
    pub fn reader(&self) -> SessionReader {
        self.store.reader()
    }

    /// # Errors
    ///
    /// See [`SessionStore::login`].
    pub async fn login(&self, credentials: &Credentials) -> Result<Role, AuthError> {
        self.store.login(credentials).await
    }

    pub fn logout(&self) -> bool {
        self.store.logout()
    }

    /// Drop an established session the backend has stopped honouring.
    /// See [`SessionStore::expire`].
    pub fn expire(&self) -> bool {
        self.store.expire()
    }
}
