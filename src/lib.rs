//! # opsdesk
//!
//! Leptos + WASM frontend for the operations dashboard.
//!
//! This crate resolves and tracks the light/dark theme: it reconciles the
//! user's persisted choice, the OS color-scheme preference, and changes made
//! in other tabs, and exposes the result to components through context.

pub mod app;
pub mod components;
pub mod state;
pub mod theme;

/// WASM entry point: resolve the theme before the first paint, then hydrate.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    theme::init(theme::ThemeConfig::default());
    leptos::mount::hydrate_body(app::App);
}
