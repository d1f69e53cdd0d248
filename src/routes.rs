//! Route table: which pages are protected and how.
//!
//! SYSTEM CONTEXT
//! ==============
//! `app` mounts these paths; each protected page wraps itself in `Guarded`
//! with the policy returned by [`policy_for`]. Anything not listed is public.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::guard::{GuardPolicy, Severity};
use crate::session::Role;

pub const HOME: &str = "/";
pub const LOGIN: &str = "/login";
pub const ADMIN_DASHBOARD: &str = "/admin";
pub const USER_MANAGEMENT: &str = "/admin/usuarios";
pub const CUSTOMIZATION: &str = "/personalizar";

const CUSTOMIZATION_NOTICE: &str = "Debes iniciar sesión para personalizar tu evento.";

/// Access policy for `path`. Trailing slashes are ignored.
#[must_use]
pub fn policy_for(path: &str) -> GuardPolicy {
    match normalize(path) {
        ADMIN_DASHBOARD => GuardPolicy::role(Role::Administrador),
        USER_MANAGEMENT => GuardPolicy::role(Role::Organizador),
        CUSTOMIZATION => GuardPolicy::authenticated().with_notice(CUSTOMIZATION_NOTICE, Severity::Warning),
        _ => GuardPolicy::public(),
    }
}

/// Where a fresh login lands, by role.
#[must_use]
pub fn landing_for(role: &Role) -> &'static str {
    if *role == Role::Administrador {
        ADMIN_DASHBOARD
    } else if *role == Role::Organizador {
        USER_MANAGEMENT
    } else {
        HOME
    }
}

fn normalize(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or(path);
    if path.len() > 1 { path.trim_end_matches('/') } else { path }
}
