//! Page agent for the theme switcher extension.
//!
//! This crate is compiled to WebAssembly and injected into every page as a
//! content script. It owns the page's [`protocol::ThemeState`], installs or
//! removes the inversion stylesheet on `<html>`, persists the state per
//! hostname, and answers requests from the popup. The browser bindings are
//! a thin shell over [`agent::PageAgent`], which holds all the logic and is
//! tested without a browser.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`agent`] | Testable agent core: state, override, persistence, dispatch |
//! | [`dom`] | The [`dom::PageRoot`] surface the agent mutates |
//! | [`store`] | The [`store::KeyValueStore`] surface and an in-memory store |
//! | [`styles`] | Stylesheet text for each theme |
//! | [`consts`] | Marker attribute and style block identifiers |

pub mod agent;
pub mod consts;
pub mod dom;
pub mod store;
pub mod styles;

#[cfg(target_arch = "wasm32")]
mod browser;
