//! # client
//!
//! Leptos + WASM frontend for the Shri Vishnu Waman Thakur Developers site.
//!
//! This crate contains the public landing page, the admin login and the
//! admin dashboard, plus the browser adapters (`localStorage`,
//! `sessionStorage`, `Date.now()`, `FileReader`) that bind the `content`
//! crate's ports to the page. It renders on the server under the `ssr`
//! feature and hydrates in the browser under `hydrate`; storage is only
//! touched after hydration.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
