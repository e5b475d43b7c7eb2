//! # monster-admin
//!
//! Leptos + WASM frontend for the Monster section of the admin application.
//!
//! This crate contains the add-Monster form, its nav chrome, the shared
//! store slices it reads and writes, the dispatch interface those writes go
//! through, and the REST helpers that back the dispatch interface in the
//! browser.

pub mod actions;
pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routing;
pub mod state;
pub mod util;

/// WASM entry point: installs logging and hydrates the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
