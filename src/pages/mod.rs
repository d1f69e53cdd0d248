//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Protected pages wrap their content in `Guarded` with the policy from the
//! route table; public pages render directly.

pub mod admin_dashboard;
pub mod customization;
pub mod home;
pub mod login;
pub mod user_management;
