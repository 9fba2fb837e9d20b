//! Page refresh control.

use leptos::*;

/// Reloads the page, discarding all client state.
#[component]
pub fn RefreshButton() -> impl IntoView {
    let on_refresh_click = move |_| {
        if let Err(e) = gloo_utils::window().location().reload() {
            log::warn!("Failed to reload page: {:?}", e);
        }
    };

    view! {
        <button class="refresh-button" id="refreshBtn" on:click=on_refresh_click>
            "Refresh"
        </button>
    }
}
