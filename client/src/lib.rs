//! # client
//!
//! Leptos + WASM frontend for the AI component generator. Pages cover the
//! anonymous workspace, login, and per-project workspaces; generated code
//! lives in a virtual file system that never touches disk.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point for hydration of the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
