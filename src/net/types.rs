//! Wire DTOs for the `/api/auth/*` endpoints.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::session::{Grant, Identity, Role};

/// User profile as returned by the auth endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// `POST /api/auth/login` success body.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserProfile,
}

/// `GET /api/auth/session` success body.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SessionResponse {
    pub user: UserProfile,
}

impl UserProfile {
    /// Pair the profile with the token that authenticated it.
    #[must_use]
    pub fn into_grant(self, token: String) -> Grant {
        Grant {
            role: self.role,
            identity: Identity::new(self.id, self.name, self.email, token),
        }
    }
}

impl LoginResponse {
    #[must_use]
    pub fn into_grant(self) -> Grant {
        self.user.into_grant(self.token)
    }
}
