//! # client
//!
//! Leptos + WASM frontend for the birthday keepsake site: a password gate,
//! photo album, four mini-games, a message board and a closing summary.
//!
//! Every piece of visitor state is a typed `slices::PersistedSlice` bound to
//! one `localStorage` key (see `state::site`), so reloading the page restores
//! exactly where the visitor left off.

pub mod app;
pub mod components;
pub mod content;
pub mod games;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
