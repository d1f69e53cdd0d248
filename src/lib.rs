//! # storefront
//!
//! Leptos + WASM client for the event-booking storefront and its admin area.
//!
//! The interesting part of this crate is the session layer: `session` owns
//! the canonical login state and its transitions, `guard` turns that state
//! plus a page's access requirement into render/redirect decisions, and
//! `components`/`pages` are thin Leptos shells wired on top of both.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod guard;
pub mod net;
pub mod pages;
pub mod routes;
pub mod session;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
