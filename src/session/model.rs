//! Session value types.
//!
//! DESIGN
//! ======
//! `Session` is a closed three-state enum. The role and identity live inside
//! the `Authenticated` variant, so "role present iff authenticated" holds by
//! construction and no loading/authenticated flag combination can be invalid.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

const ADMINISTRADOR: &str = "Administrador";
const ORGANIZADOR: &str = "Organizador";

/// Authorization role attached to an authenticated session.
///
/// The set is open: anything the backend sends that is not a known role is
/// kept verbatim in `Other`. Parsing is exact and case-sensitive, so
/// `"administrador"` is `Other` and never matches `Administrador`.
///
/// Equality and hashing go through [`Role::as_str`], so a hand-built
/// `Other("Administrador")` is the same role as `Administrador`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Administrador,
    Organizador,
    Other(String),
}

impl Role {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Administrador => ADMINISTRADOR,
            Self::Organizador => ORGANIZADOR,
            Self::Other(raw) => raw,
        }
    }
}

impl PartialEq for Role {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for Role {}

impl Hash for Role {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl From<&str> for Role {
    fn from(raw: &str) -> Self {
        match raw {
            ADMINISTRADOR => Self::Administrador,
            ORGANIZADOR => Self::Organizador,
            other => Self::Other(other.to_owned()),
        }
    }
}

impl From<String> for Role {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            ADMINISTRADOR => Self::Administrador,
            ORGANIZADOR => Self::Organizador,
            _ => Self::Other(raw),
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        match role {
            Role::Other(raw) => raw,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The authenticated principal. Read-only outside this crate; the session
/// token is never handed to page code.
#[derive(Clone, PartialEq, Eq)]
pub struct Identity {
    user_id: String,
    name: String,
    email: String,
    token: String,
}

impl Identity {
    #[must_use]
    pub fn new(user_id: String, name: String, email: String, token: String) -> Self {
        Self { user_id, name, email, token }
    }

    #[must_use]
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    pub(crate) fn token(&self) -> &str {
        &self.token
    }
}

impl fmt::Debug for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Identity")
            .field("user_id", &self.user_id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("token", &"<redacted>")
            .finish()
    }
}

/// Coarse session status, without the payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionStatus {
    Initializing,
    Authenticated,
    Unauthenticated,
}

/// Snapshot of the client session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Session {
    /// Boot-time restore has not resolved yet. Not the same as logged out.
    #[default]
    Initializing,
    Authenticated { role: Role, identity: Identity },
    Unauthenticated,
}

impl Session {
    #[must_use]
    pub fn status(&self) -> SessionStatus {
        match self {
            Self::Initializing => SessionStatus::Initializing,
            Self::Authenticated { .. } => SessionStatus::Authenticated,
            Self::Unauthenticated => SessionStatus::Unauthenticated,
        }
    }

    #[must_use]
    pub fn role(&self) -> Option<&Role> {
        match self {
            Self::Authenticated { role, .. } => Some(role),
            _ => None,
        }
    }

    #[must_use]
    pub fn identity(&self) -> Option<&Identity> {
        match self {
            Self::Authenticated { identity, .. } => Some(identity),
            _ => None,
        }
    }

    /// `true` once the boot-time restore (or an earlier login/logout) settled.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        !matches!(self, Self::Initializing)
    }
}

/// Login form payload, serialized as the `POST /api/auth/login` body.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self { email: email.into(), password: password.into() }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}
