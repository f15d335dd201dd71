use leptos::prelude::*;
use themenav_domain::theme::Theme;

/// Outline glyph on the trigger: crescent for dark, sun for light.
#[component]
pub fn ThemeIcon(theme: ReadSignal<Theme>) -> impl IntoView {
    move || {
        let icon = theme.get().trigger_icon();
        view! {
            <svg
                xmlns="http://www.w3.org/2000/svg"
                fill="none"
                viewBox="0 0 24 24"
                stroke-width="1.5"
                stroke="currentColor"
                aria-hidden="true"
                class=format!("w-6 h-6 {}", icon.stroke_class())
            >
                <path stroke-linecap="round" stroke-linejoin="round" d=icon.path()/>
            </svg>
        }
    }
}
