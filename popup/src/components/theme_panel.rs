//! Main popup panel: enable switch, theme options, and footer.

use leptos::prelude::*;
use protocol::{Request, Theme};

use crate::components::theme_option::ThemeOption;
use crate::net::tabs::send_request;
use crate::state::panel::{PanelAction, PanelState};

/// Popup body.
///
/// Queries the active tab once on mount. Until an agent answers, no theme is
/// selected and the switch shows its default.
#[component]
pub fn ThemePanel() -> impl IntoView {
    let panel = expect_context::<RwSignal<PanelState>>();

    send_request(Request::GetTheme, move |reply| {
        panel.update(|p| p.apply_snapshot(reply));
    });

    let on_toggle_enabled = move |_| {
        let next = panel.get_untracked().next_enabled();
        let mut started = false;
        panel.update(|p| started = p.begin(PanelAction::ToggleEnabled));
        if !started {
            return;
        }
        send_request(Request::ToggleEnabled { enabled: next }, move |reply| {
            panel.update(|p| p.finish_enabled(reply));
        });
    };

    let enabled = move || panel.get().enabled;

    view! {
        <div class="theme-panel">
            <div class="theme-panel__header">
                <h1 class="theme-panel__title">"Theme Switcher"</h1>
                <div class="theme-panel__switch-group">
                    <span class="theme-panel__status">{move || panel.get().status_label()}</span>
                    <button
                        class="theme-panel__switch"
                        class:theme-panel__switch--on=enabled
                        on:click=on_toggle_enabled
                        title="Toggle theme override"
                    >
                        <span class="theme-panel__knob"></span>
                    </button>
                </div>
            </div>

            <p class="theme-panel__description">
                "Make any website easier to read by switching between light and dark themes."
            </p>

            <Show when=move || panel.get().options_visible()>
                <div class="theme-panel__options">
                    {Theme::ALL.into_iter().map(|theme| view! { <ThemeOption theme=theme/> }).collect_view()}
                </div>
            </Show>

            <div class="theme-panel__footer">
                <p>"Works on all websites \u{2022} Toggle anytime"</p>
            </div>
        </div>
    }
}
