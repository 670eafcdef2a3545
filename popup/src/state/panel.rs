//! Displayed theme state and per-action request tracking.

#[cfg(test)]
#[path = "panel_test.rs"]
mod panel_test;

use protocol::{Theme, ThemeState};

/// A user action that sends one request and waits for its reply.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelAction {
    ToggleEnabled,
    SelectTheme,
}

/// What the popup currently shows for the active tab.
///
/// `theme` stays `None` until a page agent answers, so no option is marked
/// selected on pages without an agent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PanelState {
    pub theme: Option<Theme>,
    pub enabled: bool,
    pub enabled_in_flight: bool,
    pub theme_in_flight: bool,
}

impl Default for PanelState {
    fn default() -> Self {
        Self { theme: None, enabled: true, enabled_in_flight: false, theme_in_flight: false }
    }
}

impl PanelState {
    /// Adopt the agent's answer to the opening query. No answer leaves the
    /// initial display untouched.
    pub fn apply_snapshot(&mut self, reply: Option<ThemeState>) {
        if let Some(state) = reply {
            self.theme = Some(state.theme);
            self.enabled = state.enabled;
        }
    }

    /// Value to request when the enable switch is clicked.
    #[must_use]
    pub fn next_enabled(&self) -> bool {
        !self.enabled
    }

    /// Mark `action` as in flight. Returns `false` if a request for it is
    /// already outstanding, in which case nothing should be sent.
    pub fn begin(&mut self, action: PanelAction) -> bool {
        let slot = match action {
            PanelAction::ToggleEnabled => &mut self.enabled_in_flight,
            PanelAction::SelectTheme => &mut self.theme_in_flight,
        };
        if *slot {
            return false;
        }
        *slot = true;
        true
    }

    /// Settle the enable switch request; only the enabled flag is taken from
    /// the reply.
    pub fn finish_enabled(&mut self, reply: Option<ThemeState>) {
        self.enabled_in_flight = false;
        if let Some(state) = reply {
            self.enabled = state.enabled;
        }
    }

    /// Settle a theme selection request; only the theme is taken from the
    /// reply.
    pub fn finish_theme(&mut self, reply: Option<ThemeState>) {
        self.theme_in_flight = false;
        if let Some(state) = reply {
            self.theme = Some(state.theme);
        }
    }

    /// Theme options are offered only while the override is enabled.
    #[must_use]
    pub fn options_visible(&self) -> bool {
        self.enabled
    }

    #[must_use]
    pub fn is_selected(&self, theme: Theme) -> bool {
        self.theme == Some(theme)
    }

    /// Label next to the enable switch.
    #[must_use]
    pub fn status_label(&self) -> &'static str {
        if self.enabled { "On" } else { "Off" }
    }
}

/// Button label for a theme option.
#[must_use]
pub fn theme_label(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "Light Theme",
        Theme::Dark => "Dark Theme",
    }
}

/// Glyph shown beside a theme option.
#[must_use]
pub fn theme_icon(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "☀",
        Theme::Dark => "☾",
    }
}
