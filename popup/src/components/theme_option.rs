//! One selectable theme row.

use leptos::prelude::*;
use protocol::{Request, Theme};

use crate::net::tabs::send_request;
use crate::state::panel::{PanelAction, PanelState, theme_icon, theme_label};

/// Button that requests `theme` for the active tab.
///
/// Always sends the option's own theme, never the opposite of what is
/// displayed.
#[component]
pub fn ThemeOption(theme: Theme) -> impl IntoView {
    let panel = expect_context::<RwSignal<PanelState>>();
    let selected = move || panel.get().is_selected(theme);

    let on_select = move |_| {
        let mut started = false;
        panel.update(|p| started = p.begin(PanelAction::SelectTheme));
        if !started {
            return;
        }
        send_request(Request::ToggleTheme { theme }, move |reply| {
            panel.update(|p| p.finish_theme(reply));
        });
    };

    view! {
        <button
            class="theme-option"
            class:theme-option--selected=selected
            data-theme=theme.as_str()
            on:click=on_select
        >
            <span class="theme-option__label">
                <span class="theme-option__icon">{theme_icon(theme)}</span>
                {theme_label(theme)}
            </span>
            <Show when=selected>
                <span class="theme-option__dot"></span>
            </Show>
        </button>
    }
}
