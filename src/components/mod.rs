//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components connect the session core to Leptos: context provisioning,
//! guarded rendering, notifications and the header session widget.

pub mod auth;
pub mod guarded;
pub mod session_menu;
pub mod toast;
