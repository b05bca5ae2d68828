//! # estate-client
//!
//! Leptos + WASM frontend for the real-estate listing application.
//!
//! This crate contains pages, components, per-domain application state
//! (including the session store), and the network layer for the REST backend
//! and the object-storage gateway.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entrypoint: hydrate the server-rendered document into the live app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(crate::app::App);
}
