//! # client
//!
//! Leptos frontend for the kids center site: the public course catalog and
//! the parent, teacher, and admin dashboards.
//!
//! The page is server-rendered by the `server` crate (`ssr` feature) and
//! hydrated in the browser from the WASM build of this crate (`hydrate`
//! feature). All data comes from the `catalog` crate.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;

/// WASM entry point: hydrate the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    // Fails only when a logger is already installed, which is harmless.
    console_log::init_with_level(log::Level::Debug).ok();
    leptos::mount::hydrate_body(app::App);
}
