use super::*;

// =============================================================
// Initial display
// =============================================================

#[test]
fn default_has_no_theme_and_is_enabled() {
    let panel = PanelState::default();
    assert_eq!(panel.theme, None);
    assert!(panel.enabled);
    assert!(!panel.enabled_in_flight);
    assert!(!panel.theme_in_flight);
}

#[test]
fn default_selects_no_option() {
    let panel = PanelState::default();
    for theme in Theme::ALL {
        assert!(!panel.is_selected(theme));
    }
}

#[test]
fn unanswered_snapshot_keeps_initial_display() {
    let mut panel = PanelState::default();
    panel.apply_snapshot(None);
    assert_eq!(panel, PanelState::default());
}

#[test]
fn snapshot_adopts_theme_and_enabled() {
    let mut panel = PanelState::default();
    panel.apply_snapshot(Some(ThemeState { theme: Theme::Dark, enabled: false }));
    assert_eq!(panel.theme, Some(Theme::Dark));
    assert!(!panel.enabled);
}

// =============================================================
// Enable switch
// =============================================================

#[test]
fn next_enabled_flips_displayed_value() {
    let mut panel = PanelState::default();
    assert!(!panel.next_enabled());
    panel.enabled = false;
    assert!(panel.next_enabled());
}

#[test]
fn finish_enabled_takes_only_enabled_from_reply() {
    let mut panel = PanelState::default();
    panel.apply_snapshot(Some(ThemeState { theme: Theme::Light, enabled: true }));
    assert!(panel.begin(PanelAction::ToggleEnabled));
    panel.finish_enabled(Some(ThemeState { theme: Theme::Dark, enabled: false }));

    assert!(!panel.enabled);
    assert_eq!(panel.theme, Some(Theme::Light));
    assert!(!panel.enabled_in_flight);
}

#[test]
fn finish_enabled_without_reply_keeps_display() {
    let mut panel = PanelState::default();
    assert!(panel.begin(PanelAction::ToggleEnabled));
    panel.finish_enabled(None);
    assert!(panel.enabled);
    assert!(!panel.enabled_in_flight);
}

// =============================================================
// Theme selection
// =============================================================

#[test]
fn finish_theme_takes_only_theme_from_reply() {
    let mut panel = PanelState::default();
    assert!(panel.begin(PanelAction::SelectTheme));
    panel.finish_theme(Some(ThemeState { theme: Theme::Dark, enabled: false }));

    assert_eq!(panel.theme, Some(Theme::Dark));
    assert!(panel.enabled);
    assert!(panel.is_selected(Theme::Dark));
    assert!(!panel.is_selected(Theme::Light));
}

#[test]
fn finish_theme_without_reply_keeps_display() {
    let mut panel = PanelState::default();
    panel.apply_snapshot(Some(ThemeState { theme: Theme::Light, enabled: true }));
    assert!(panel.begin(PanelAction::SelectTheme));
    panel.finish_theme(None);
    assert_eq!(panel.theme, Some(Theme::Light));
    assert!(!panel.theme_in_flight);
}

// =============================================================
// In-flight tracking
// =============================================================

#[test]
fn begin_refuses_second_request_for_same_action() {
    let mut panel = PanelState::default();
    assert!(panel.begin(PanelAction::SelectTheme));
    assert!(!panel.begin(PanelAction::SelectTheme));
    panel.finish_theme(None);
    assert!(panel.begin(PanelAction::SelectTheme));
}

#[test]
fn actions_are_tracked_independently() {
    let mut panel = PanelState::default();
    assert!(panel.begin(PanelAction::ToggleEnabled));
    assert!(panel.begin(PanelAction::SelectTheme));
    assert!(!panel.begin(PanelAction::ToggleEnabled));
}

// =============================================================
// Rendering rules
// =============================================================

#[test]
fn options_visible_only_while_enabled() {
    let mut panel = PanelState::default();
    assert!(panel.options_visible());
    panel.enabled = false;
    assert!(!panel.options_visible());
}

#[test]
fn status_label_tracks_enabled() {
    let mut panel = PanelState::default();
    assert_eq!(panel.status_label(), "On");
    panel.enabled = false;
    assert_eq!(panel.status_label(), "Off");
}

#[test]
fn theme_labels_and_icons_are_distinct() {
    assert_eq!(theme_label(Theme::Light), "Light Theme");
    assert_eq!(theme_label(Theme::Dark), "Dark Theme");
    assert_ne!(theme_icon(Theme::Light), theme_icon(Theme::Dark));
}
