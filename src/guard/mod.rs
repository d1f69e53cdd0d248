//! Per-page access control on top of the session store.
//!
//! DESIGN
//! ======
//! `policy` is a pure function from (session, requirement) to an outcome.
//! `route_guard` subscribes to the store, re-runs that function on every
//! transition and performs redirect side effects at most once per denial.
//! Navigation and user notification are reached only through the two traits
//! below so the guard runs unchanged under the router or in a test.

pub mod policy;
pub mod route_guard;

pub use policy::{AccessRequirement, Denial, DenyNotice, Destinations, GuardPolicy, GuardView, Outcome, evaluate};
pub use route_guard::RouteGuard;

/// Performs page transitions. Fire-and-forget.
pub trait Navigator {
    fn navigate(&self, path: &str);
}

/// Severity of a user-visible notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl Severity {
    /// CSS modifier used by the toast shell.
    #[must_use]
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

/// Surfaces a message to the user (toast, banner, ...).
pub trait NotificationSink {
    fn notify(&self, message: &str, severity: Severity);
}
