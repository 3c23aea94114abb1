//! # securedash
//!
//! Leptos + WASM client for the secure dashboard. Five screens (guest
//! landing, login, signup, home, profile) share one authentication
//! session controller: a per-screen guard that verifies the session on
//! mount, a page-lifetime session store holding the current principal,
//! and a thin client over the remote auth service.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
