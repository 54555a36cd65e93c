//! # odhiyati-web
//!
//! Leptos + WASM front-end for the أضحيتي livestock marketplace.
//!
//! Authentication is delegated to an external identity provider and
//! profile records live in an external document store; this crate
//! contains the pages, components, shared state, the session bootstrap
//! flow, and the REST clients that talk to the managed backend.

pub mod app;
pub mod auth;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install panic/log hooks and hydrate the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("hydrating odhiyati client");
    leptos::mount::hydrate_body(crate::app::App);
}
