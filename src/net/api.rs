//! HTTP implementation of the auth backend contract.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs reporting `NetworkFailure`, since the session
//! only exists in the browser. A restore that fails this way resolves to the
//! logged-out state, which is what the server should render anyway.
//!
//! ERROR HANDLING
//! ==============
//! Transport errors become `NetworkFailure`; statuses and bodies the client
//! cannot use become `UnexpectedResponse`. Only login maps a status to
//! `InvalidCredentials`; restore maps 401/403 to "token rejected" (`Ok(None)`).

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::session::{AuthBackend, Credentials, Grant};
#[cfg(feature = "hydrate")]
use super::types::{LoginResponse, SessionResponse};

#[cfg(not(feature = "hydrate"))]
const UNAVAILABLE: &str = "auth backend is only reachable from the browser";

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(any(test, feature = "hydrate"))]
fn login_failure(status: u16) -> AuthError {
    match status {
        400 | 401 | 403 => AuthError::InvalidCredentials,
        other => AuthError::UnexpectedResponse(format!("login failed: {other}")),
    }
}

/// `Ok(true)` = session accepted, `Ok(false)` = token rejected.
#[cfg(any(test, feature = "hydrate"))]
fn restore_verdict(status: u16) -> Result<bool, AuthError> {
    match status {
        200..=299 => Ok(true),
        401 | 403 => Ok(false),
        other => Err(AuthError::UnexpectedResponse(format!("session check failed: {other}"))),
    }
}

/// Talks to `/api/auth/*` on the configured origin.
#[derive(Debug, Clone)]
pub struct HttpAuthBackend {
    config: AuthConfig,
}

impl HttpAuthBackend {
    #[must_use]
    pub fn new(config: AuthConfig) -> Self {
        Self { config }
    }
}

#[async_trait::async_trait(?Send)]
impl AuthBackend for HttpAuthBackend {
    async fn login(&self, credentials: &Credentials) -> Result<Grant, AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&self.config.endpoint("login"))
                .json(credentials)
                .map_err(|e| AuthError::UnexpectedResponse(e.to_string()))?
                .send()
                .await
                .map_err(|e| AuthError::NetworkFailure(e.to_string()))?;
            if !resp.ok() {
                return Err(login_failure(resp.status()));
            }
            let body: LoginResponse = resp
                .json()
                .await
                .map_err(|e| AuthError::UnexpectedResponse(e.to_string()))?;
            Ok(body.into_grant())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (credentials, &self.config);
            Err(AuthError::NetworkFailure(UNAVAILABLE.to_owned()))
        }
    }

    async fn restore(&self, token: &str) -> Result<Option<Grant>, AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&self.config.endpoint("session"))
                .header("Authorization", &bearer(token))
                .send()
                .await
                .map_err(|e| AuthError::NetworkFailure(e.to_string()))?;
            if !restore_verdict(resp.status())? {
                return Ok(None);
            }
            let body: SessionResponse = resp
                .json()
                .await
                .map_err(|e| AuthError::UnexpectedResponse(e.to_string()))?;
            Ok(Some(body.user.into_grant(token.to_owned())))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
            Err(AuthError::NetworkFailure(UNAVAILABLE.to_owned()))
        }
    }
}

/// Tell the backend to drop the session via `POST /api/auth/logout`.
/// Best-effort: the local session ends regardless of the answer.
pub async fn logout(config: &AuthConfig, token: &str) {
    #[cfg(feature = "hydrate")]
    {
        let result = gloo_net::http::Request::post(&config.endpoint("logout"))
            .header("Authorization", &bearer(token))
            .send()
            .await;
        if let Err(e) = result {
            log::warn!("logout request failed: {e}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, token);
    }
}
