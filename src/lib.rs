//! # lawchat
//!
//! Leptos + WASM client for a legal question-answering service.
//!
//! The core (conversation session, favorites and feedback stores, wire
//! mapping, error classification) is plain Rust and tested natively. Browser
//! glue (fetch, `localStorage`, clipboard, mounting) sits behind the `csr`
//! feature.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod state;
pub mod store;
pub mod util;

/// WASM entry point: panic hook, console logging, then mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // A second init only happens on hot reload; the first logger stays.
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
