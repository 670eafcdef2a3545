//! Popup UI components.

pub mod theme_option;
pub mod theme_panel;
