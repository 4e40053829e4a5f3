//! # client
//!
//! Leptos + WASM frontend for the Bharat-Drishti dashboard.
//!
//! This crate contains the pages, components, reactive state, timers, and
//! SVG chart layout. Data and presentation rules live in the `catalog`
//! crate; this crate only renders them and tracks session-local state.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
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
