//! # client
//!
//! Leptos + WASM frontend for the AI safety incident dashboard.
//!
//! This crate contains the page and components that render an
//! [`incident_board::IncidentBoard`]. All incident logic lives in the
//! `incident-board` crate; everything here is presentation glue.

pub mod app;
pub mod components;
pub mod pages;

/// WASM entry point: installs browser logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
