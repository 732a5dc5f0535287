//! Reelbase - movie and TV catalog client
//!
//! The authentication core of the catalog SPA: a persisted session store, the
//! route guard in front of signed-in views, and the auth views built on them,
//! written with Leptos and compiled to WebAssembly.

pub mod app;
pub mod core;
pub mod ui;

/// Client entry point.
///
/// Named `hydrate` because that is what the generated loader script calls. The
/// app is mounted rather than hydrated: the server cannot see the session kept
/// in `localStorage`, so the first render has to happen in the browser.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
