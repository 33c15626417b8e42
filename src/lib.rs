//! # tracker-ui
//!
//! Leptos + WASM frontend for the tracker link-shortening service.
//!
//! The interesting part is the session/authorization pipeline: the
//! request/response interceptors in [`net::http`], the credential and
//! guest-mode state in [`util::credentials`] and [`state::session`], and
//! the navigation guard in [`routes`]. Pages and components are thin glue
//! over those.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(crate::app::App);
}
