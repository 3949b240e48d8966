//! # analyst-client
//!
//! Leptos + WASM frontend for the financial analyst chat. Talks to the
//! analysis API over REST, renders returned charts with Chart.js, and plays
//! synthesized speech for assistant replies.
//!
//! This crate contains the page, components, application state, network
//! types, and browser helpers. The host binary renders it on the server and
//! the `hydrate` entry point takes over in the browser.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: route logs and panics to the console, then hydrate
/// the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
