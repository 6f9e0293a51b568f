//! Buildhouse Labs - marketing site
//!
//! Single-page site with an industry use-case showcase and a multi-step
//! lead-capture form, server-rendered with Leptos and hydrated in the browser.

#![recursion_limit = "512"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
