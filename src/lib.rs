//! # meet-client
//!
//! Leptos + WASM frontend for Meet.AI's sign-in flow.
//!
//! This crate contains the sign-in page, its presentational components, the
//! form controller and validation schema, and the HTTP client for the
//! external auth service. Everything outside the view layer is plain Rust
//! and is tested without a browser.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod form;
pub mod net;
pub mod pages;
pub mod util;

/// WASM hydration entry point.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        log::warn!("console logger already installed");
    }
    leptos::mount::hydrate_body(app::App);
}
