//! Session token persistence in `localStorage`.
//!
//! TRADE-OFFS
//! ==========
//! Storage access is best-effort browser-only behavior. Private-mode or
//! quota failures are logged and otherwise ignored: the visitor just has to
//! log in again next time. SSR paths no-op, so a server render always sees
//! "no token".

#[cfg(test)]
#[path = "token_storage_test.rs"]
mod token_storage_test;

use crate::session::TokenStore;

/// `TokenStore` backed by `window.localStorage`.
#[derive(Debug, Clone)]
pub struct BrowserTokenStore {
    key: String,
}

impl BrowserTokenStore {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    #[cfg(feature = "hydrate")]
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl TokenStore for BrowserTokenStore {
    fn load(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            Self::storage()?
                .get_item(&self.key)
                .ok()
                .flatten()
                .filter(|token| !token.is_empty())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &self.key;
            None
        }
    }

    fn save(&self, token: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = Self::storage() else {
                return;
            };
            if storage.set_item(&self.key, token).is_err() {
                log::warn!("could not persist session token");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = Self::storage() {
                let _ = storage.remove_item(&self.key);
            }
        }
    }
}
