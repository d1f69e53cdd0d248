//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from the session core
//! so it stays testable off the browser.

pub mod token_storage;
