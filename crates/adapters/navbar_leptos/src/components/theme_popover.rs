use leptos::html;
use leptos::prelude::*;
use themenav_app::ports::FloatingAdapter;
use themenav_domain::aria::FloatingAria;
use themenav_domain::geometry::{Point, floating_styles};
use themenav_domain::theme::Theme;

use super::{CompassToggle, PANEL_ID, TRIGGER_ID};
use crate::floating::{DomPopover, trap_tab};

/// Floating panel with the "Light" / "Dark" labels and the compass toggle.
///
/// Mounted only while the popover is open. It registers itself as the
/// floating element on mount and unregisters on cleanup.
#[component]
pub fn ThemePopover(
    popover: StoredValue<DomPopover, LocalStorage>,
    position: ReadSignal<Option<Point>>,
    theme: ReadSignal<Theme>,
    on_toggle: Callback<()>,
) -> impl IntoView {
    let panel_ref = NodeRef::<html::Div>::new();
    let aria = FloatingAria::new(PANEL_ID, TRIGGER_ID);

    Effect::new(move |_| {
        if let Some(panel) = panel_ref.get() {
            popover.with_value(|c| c.set_floating(Some(panel.into())));
        }
    });
    on_cleanup(move || {
        popover.try_with_value(|c| c.set_floating(None));
    });

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if let Some(panel) = panel_ref.get_untracked() {
            trap_tab(&panel, &ev);
        }
    };

    view! {
        <div
            node_ref=panel_ref
            id=aria.id.clone()
            role=aria.role()
            aria-labelledby=aria.labelled_by.clone()
            tabindex="-1"
            style=move || floating_styles(position.get())
            class="w-60 h-24 dark:bg-slate-900 bg-slate-200 border-none md:flex p-2 rounded-lg shadow-lg hidden z-10"
            on:keydown=on_keydown
        >
            <span class="self-center">"Light"</span>
            <CompassToggle theme=theme on_toggle=on_toggle/>
            <span class="self-center">"Dark"</span>
        </div>
    }
}
