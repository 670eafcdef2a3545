//! Stylesheet text injected for each theme.
//!
//! Every rule is scoped by `html[data-theme-switcher="..."]`, so a block only
//! takes effect while the marker attribute on `<html>` names its theme.

use protocol::Theme;

#[cfg(test)]
#[path = "styles_test.rs"]
mod styles_test;

/// Inverts the page, then inverts media again so photos and video keep
/// roughly their original colors.
pub const DARK_CSS: &str = r#"
html[data-theme-switcher="dark"] {
  filter: invert(1) hue-rotate(180deg);
}

html[data-theme-switcher="dark"] img,
html[data-theme-switcher="dark"] video,
html[data-theme-switcher="dark"] iframe,
html[data-theme-switcher="dark"] [style*="background-image"] {
  filter: invert(1) hue-rotate(180deg);
}

html[data-theme-switcher="dark"] * {
  background-color: inherit;
  border-color: inherit;
}
"#;

/// Clears any inversion.
pub const LIGHT_CSS: &str = r#"
html[data-theme-switcher="light"] {
  filter: none;
}
"#;

/// Stylesheet text for `theme`.
#[must_use]
pub fn css_for(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => LIGHT_CSS,
        Theme::Dark => DARK_CSS,
    }
}
