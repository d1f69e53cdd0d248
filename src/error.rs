//! Error types for the session layer.
//!
//! ERROR HANDLING
//! ==============
//! Only explicit `login()` calls surface these to a caller. Restore failures
//! are folded into the logged-out state, and a role mismatch is a guard
//! outcome rather than an error, so neither appears here.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure talking to the auth backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("network failure: {0}")]
    NetworkFailure(String),
    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),
}

impl AuthError {
    /// Short message suitable for inline display next to the login form.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::InvalidCredentials => "Correo o contraseña incorrectos.",
            Self::NetworkFailure(_) | Self::UnexpectedResponse(_) => {
                "No se pudo contactar con el servidor. Inténtalo de nuevo."
            }
        }
    }
}
