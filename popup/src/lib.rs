//! # popup
//!
//! Leptos + WASM control panel for the theme switcher extension.
//!
//! The panel asks the active tab's page agent for its state when opened,
//! shows it, and relays the user's choices back as requests. State rules live
//! in [`state`] and build natively; browser messaging in [`net`] is gated
//! behind the `csr` feature.

pub mod app;
pub mod components;
pub mod net;
pub mod state;

/// Popup entry point: install logging and mount the panel.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Warn };
    if let Err(err) = console_log::init_with_level(level) {
        leptos::logging::warn!("console logger unavailable: {err}");
    }
    leptos::mount::mount_to_body(app::App);
}
