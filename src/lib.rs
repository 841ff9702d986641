//! # resumind-ui
//!
//! Leptos + WASM frontend for the Resumind resume manager. Replaces the
//! React client with a Rust-native UI layer on top of the hosted
//! storage/auth backend.
//!
//! This crate contains pages, components, application state, and the
//! network client for the backend's filesystem, key-value, and auth
//! endpoints.

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
