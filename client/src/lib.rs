//! # campus-client
//!
//! Leptos + WASM frontend for the campus events application.
//!
//! This crate contains the session store, the auth context and route guard,
//! the realtime connectivity tracker, network types, and the pages that mount
//! them. The host binary links it with the `ssr` feature; the browser bundle
//! is built with `hydrate`.

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
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger already initialized");
    }
    leptos::mount::hydrate_body(app::App);
}
