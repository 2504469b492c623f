//! # client
//!
//! Leptos + WASM frontend for the MonsterEOS home screen.
//!
//! This crate contains the home page, its collaborator components (page
//! chrome, 3D monster profile, message board, message composer), the monster
//! model catalog, and the client-side state provided through Leptos context.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod config;
pub mod monsters;
pub mod pages;
pub mod state;

/// WASM entry point: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
