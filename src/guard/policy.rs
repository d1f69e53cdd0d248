//! Route access decisions.
//!
//! | session              | requirement            | outcome                    |
//! |----------------------|------------------------|----------------------------|
//! | initializing         | any                    | wait                       |
//! | unauthenticated      | public                 | render                     |
//! | unauthenticated      | authenticated / role   | redirect to login          |
//! | authenticated        | public / authenticated | render                     |
//! | authenticated, R     | role R                 | render                     |
//! | authenticated, not R | role R                 | redirect to home           |

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;

use super::Severity;
use crate::config::AuthConfig;
use crate::session::{Role, Session};

/// What a page demands of the session before it renders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AccessRequirement {
    /// Anyone, logged in or not.
    Public,
    AuthenticatedOnly,
    RequiresRole(Role),
}

/// Why a guard is redirecting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Denial {
    /// No session: go log in.
    NotAuthenticated,
    /// Logged in, but not with the role the page needs.
    WrongRole,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Session still initializing; show a placeholder and do nothing else.
    Wait,
    Render,
    Redirect(Denial),
}

/// What the guarded page shows. Redirecting is a side effect, not a view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardView {
    Placeholder,
    Content,
}

impl Outcome {
    #[must_use]
    pub fn view(self) -> GuardView {
        match self {
            Self::Render => GuardView::Content,
            Self::Wait | Self::Redirect(_) => GuardView::Placeholder,
        }
    }
}

/// Decide what to do with `session` for a page demanding `requirement`.
///
/// Total: unknown roles are plain non-matches.
#[must_use]
pub fn evaluate(session: &Session, requirement: &AccessRequirement) -> Outcome {
    match (session, requirement) {
        (Session::Initializing, _) => Outcome::Wait,
        (_, AccessRequirement::Public) => Outcome::Render,
        (Session::Unauthenticated, _) => Outcome::Redirect(Denial::NotAuthenticated),
        (Session::Authenticated { .. }, AccessRequirement::AuthenticatedOnly) => Outcome::Render,
        (Session::Authenticated { role, .. }, AccessRequirement::RequiresRole(required)) => {
            if role == required {
                Outcome::Render
            } else {
                Outcome::Redirect(Denial::WrongRole)
            }
        }
    }
}

/// Redirect targets per denial reason.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Destinations {
    pub login: String,
    pub home: String,
}

impl Destinations {
    #[must_use]
    pub fn from_config(config: &AuthConfig) -> Self {
        Self { login: config.login_path.clone(), home: config.home_path.clone() }
    }

    #[must_use]
    pub fn for_denial(&self, denial: Denial) -> &str {
        match denial {
            Denial::NotAuthenticated => &self.login,
            Denial::WrongRole => &self.home,
        }
    }
}

impl Default for Destinations {
    fn default() -> Self {
        Self::from_config(&AuthConfig::default())
    }
}

/// Message shown before a guard redirects.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DenyNotice {
    pub message: String,
    pub severity: Severity,
}

/// A page's requirement plus whether a denial should be explained.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GuardPolicy {
    pub requirement: AccessRequirement,
    pub notice: Option<DenyNotice>,
}

impl GuardPolicy {
    #[must_use]
    pub fn public() -> Self {
        Self { requirement: AccessRequirement::Public, notice: None }
    }

    #[must_use]
    pub fn authenticated() -> Self {
        Self { requirement: AccessRequirement::AuthenticatedOnly, notice: None }
    }

    #[must_use]
    pub fn role(role: Role) -> Self {
        Self { requirement: AccessRequirement::RequiresRole(role), notice: None }
    }

    #[must_use]
    pub fn with_notice(mut self, message: impl Into<String>, severity: Severity) -> Self {
        self.notice = Some(DenyNotice { message: message.into(), severity });
        self
    }

    #[must_use]
    pub fn evaluate(&self, session: &Session) -> Outcome {
        evaluate(session, &self.requirement)
    }
}
