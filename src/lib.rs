//! # gestao-login
//!
//! Leptos + WASM login screen for the single-page web client.
//!
//! The crate collects an email/password pair, exchanges it for a token at
//! `/api/token-auth/`, persists the token, and routes to the post-login view.
//! Browser collaborators (HTTP, `localStorage`, router, `alert`) sit behind
//! traits so the submission workflow runs unchanged under test.

pub mod app;
pub mod auth;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs panic + console logging hooks and hydrates the
/// server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
