//! # socialflow-client
//!
//! Leptos + WASM frontend for the SocialFlow AI toolkit: caption
//! generation, mood checking, and hashtag suggestion for social-media
//! posts. Replaces the original React single-page client with a
//! Rust-native UI layer.
//!
//! This crate contains the page, components, application state, and the
//! REST helpers that talk to the AI backend endpoints. The backend
//! inference itself lives behind `/api/*` and is not part of this crate.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point — hydrates the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
