//! The page surface the agent mutates.
//!
//! [`crate::agent::PageAgent`] never touches `web_sys` directly; it drives a
//! [`PageRoot`]. The browser build implements it over the live document and
//! tests substitute a recording fake.

use crate::consts::DOCUMENT_LOADING;

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

/// Root-element operations needed to install and remove a theme override.
pub trait PageRoot {
    /// Append a `<style>` block with `id` and text `css` to the root element.
    fn insert_style(&mut self, id: &str, css: &str);

    /// Remove the `<style>` block with `id`, if present.
    fn remove_style(&mut self, id: &str);

    /// Set attribute `name` on the root element.
    fn set_attribute(&mut self, name: &str, value: &str);

    /// Remove attribute `name` from the root element, if present.
    fn remove_attribute(&mut self, name: &str);
}

/// Whether `ready_state` (the value of `document.readyState`) means start-up
/// must wait for `DOMContentLoaded`.
#[must_use]
pub fn is_loading(ready_state: &str) -> bool {
    ready_state == DOCUMENT_LOADING
}
