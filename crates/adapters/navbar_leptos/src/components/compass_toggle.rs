//! Rotating compass button that flips the theme.

use leptos::prelude::*;
use themenav_domain::nav::COMPASS_SRC;
use themenav_domain::theme::Theme;

/// Inline style rotating the compass to the theme's resting angle.
#[must_use]
pub fn compass_style(theme: Theme) -> String {
    format!(
        "transform: rotate({}deg); transition: transform 500ms ease-in-out;",
        theme.compass_rotation()
    )
}

fn toggle_label(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "Switch to dark theme",
        Theme::Dark => "Switch to light theme",
    }
}

#[component]
pub fn CompassToggle(theme: ReadSignal<Theme>, on_toggle: Callback<()>) -> impl IntoView {
    view! {
        <button
            type="button"
            class="h-16 flex-grow mx-6 self-center flex justify-center"
            aria-label=move || toggle_label(theme.get())
            style=move || compass_style(theme.get())
            on:click=move |_| on_toggle.run(())
        >
            <img src=COMPASS_SRC class="self-center" alt=""/>
        </button>
    }
}
