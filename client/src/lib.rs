//! # client
//!
//! Leptos + WASM frontend for the community board.
//!
//! This crate contains the routed pages (landing, auth forms, feed), the
//! `SessionGate` component that wraps every protected page, the hosted
//! identity-provider adapter and the small amount of UI state the feed keeps.
//! The session lifecycle itself lives in the `session` crate.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
