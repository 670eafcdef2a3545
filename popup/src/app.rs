//! Root popup component and context providers.

use leptos::prelude::*;

use crate::components::theme_panel::ThemePanel;
use crate::state::panel::PanelState;

/// Root popup component.
///
/// Provides the shared [`PanelState`] signal to child components.
#[component]
pub fn App() -> impl IntoView {
    let panel = RwSignal::new(PanelState::default());
    provide_context(panel);

    view! { <ThemePanel/> }
}
