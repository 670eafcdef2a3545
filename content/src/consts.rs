//! Shared identifiers for the content crate.

// ── Page markers ────────────────────────────────────────────────

/// Attribute on `<html>` holding the active theme name while enabled.
pub const MARKER_ATTRIBUTE: &str = "data-theme-switcher";

/// `id` of the single injected `<style>` block.
pub const STYLE_ELEMENT_ID: &str = "theme-switcher-styles";

// ── Events ──────────────────────────────────────────────────────

/// Event that defers start-up while the document is still parsing.
pub const DOM_READY_EVENT: &str = "DOMContentLoaded";

/// `document.readyState` while the document is still parsing.
pub const DOCUMENT_LOADING: &str = "loading";
