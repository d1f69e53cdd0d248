//! Seams between the session store and the outside world.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthBackend` is the auth server contract (login + token restore);
//! `TokenStore` persists the session token between page loads. The browser
//! build plugs in `net::api::HttpAuthBackend` and
//! `util::token_storage::BrowserTokenStore`; tests plug in mocks.

use std::cell::RefCell;

use super::model::{Credentials, Identity, Role, Session};
use crate::error::AuthError;

/// Successful authentication as reported by the backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grant {
    pub role: Role,
    pub identity: Identity,
}

impl Grant {
    pub(crate) fn into_session(self) -> Session {
        Session::Authenticated { role: self.role, identity: self.identity }
    }
}

/// Auth server contract. Single-threaded, so futures need not be `Send`.
#[async_trait::async_trait(?Send)]
pub trait AuthBackend {
    /// Exchange credentials for a session.
    ///
    /// # Errors
    ///
    /// `InvalidCredentials` when the backend rejects the credentials,
    /// `NetworkFailure`/`UnexpectedResponse` when it cannot be reached or
    /// answers with something unusable.
    async fn login(&self, credentials: &Credentials) -> Result<Grant, AuthError>;

    /// Revalidate a persisted token. `Ok(None)` means the token was rejected.
    ///
    /// # Errors
    ///
    /// `NetworkFailure`/`UnexpectedResponse` when the backend could not give
    /// a definite answer.
    async fn restore(&self, token: &str) -> Result<Option<Grant>, AuthError>;
}

/// Persistence for the session token.
pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);
}

/// Token store that lives only as long as the value. Used in tests.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RefCell<Option<String>>,
}

impl MemoryTokenStore {
    #[must_use]
    pub fn with_token(token: &str) -> Self {
        Self { token: RefCell::new(Some(token.to_owned())) }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn save(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_owned());
    }

    fn clear(&self) {
        self.token.borrow_mut().take();
    }
}
