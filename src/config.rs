//! Client configuration for the session layer.
//!
//! DESIGN
//! ======
//! A WASM bundle has no process environment at runtime, so overrides are read
//! at build time with `option_env!` and fall back to the defaults below.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

const DEFAULT_LOGIN_PATH: &str = "/login";
const DEFAULT_HOME_PATH: &str = "/";
const DEFAULT_STORAGE_KEY: &str = "storefront_session_token";

/// Paths and endpoints the session layer depends on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthConfig {
    /// Prefix prepended to every `/api/auth/*` endpoint. Empty means same origin.
    pub api_base: String,
    /// Where unauthenticated visitors are sent by a guard.
    pub login_path: String,
    /// Where authenticated visitors with the wrong role are sent by a guard.
    pub home_path: String,
    /// `localStorage` key holding the persisted session token.
    pub storage_key: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            login_path: DEFAULT_LOGIN_PATH.to_owned(),
            home_path: DEFAULT_HOME_PATH.to_owned(),
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
        }
    }
}

impl AuthConfig {
    /// Load from `STOREFRONT_API_BASE`, `STOREFRONT_LOGIN_PATH` and
    /// `STOREFRONT_HOME_PATH` as captured at compile time.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_overrides(
            option_env!("STOREFRONT_API_BASE"),
            option_env!("STOREFRONT_LOGIN_PATH"),
            option_env!("STOREFRONT_HOME_PATH"),
        )
    }

    fn from_overrides(api_base: Option<&str>, login_path: Option<&str>, home_path: Option<&str>) -> Self {
        let defaults = Self::default();
        Self {
            api_base: api_base.map_or(defaults.api_base, |v| v.trim_end_matches('/').to_owned()),
            login_path: non_empty(login_path).unwrap_or(defaults.login_path),
            home_path: non_empty(home_path).unwrap_or(defaults.home_path),
            storage_key: defaults.storage_key,
        }
    }

    /// Absolute or origin-relative URL for an auth endpoint such as `login`.
    #[must_use]
    pub fn endpoint(&self, name: &str) -> String {
        format!("{}/api/auth/{name}", self.api_base)
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.map(str::trim).filter(|v| !v.is_empty()).map(str::to_owned)
}
