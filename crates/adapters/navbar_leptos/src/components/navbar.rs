//! The theme-aware navigation bar.
//!
//! On mount the theme is resolved once (stored value, then OS signal, then
//! light) and applied to `<html>`. The trigger opens a floating panel whose
//! compass button flips the theme.

use leptos::html;
use leptos::prelude::*;
use themenav_app::ports::FloatingAdapter;
use themenav_app::services::theme_service::ThemeService;
use themenav_domain::aria::{PANEL_ROLE, ReferenceAria};
use themenav_domain::geometry::Point;
use themenav_domain::popover::DismissReason;
use themenav_domain::theme::{DEFAULT_THEME, Theme};
use web_sys::Node;

use super::{Logo, NavLinks, PANEL_ID, TRIGGER_ID, ThemeIcon, ThemePopover};
use crate::browser::{DocumentRootSink, LocalStorageStore, MediaQueryProbe};
use crate::floating::{
    DomFocusManager, DomLayoutProbe, DomPopover, ListenerGuard, WindowAutoUpdate, listen_dismiss,
};
use crate::options::NavbarOptions;

type BrowserThemeService = ThemeService<LocalStorageStore, MediaQueryProbe, DocumentRootSink>;

#[component]
pub fn Navbar(#[prop(optional)] options: NavbarOptions) -> impl IntoView {
    // Theme
    let theme_service: StoredValue<BrowserThemeService, LocalStorage> =
        StoredValue::new_local(
            ThemeService::new(
                LocalStorageStore::new(options.storage_key.clone()),
                MediaQueryProbe,
                DocumentRootSink::new(options.marker_class.clone()),
            )
            .with_reporter(|err| leptos::logging::warn!("theme: {err}")),
        );
    let (theme, set_theme) = signal::<Theme>(DEFAULT_THEME);

    Effect::new(move |_| {
        let resolution = theme_service.with_value(|svc| svc.initialize());
        set_theme.set(resolution.theme);
    });

    let on_toggle = Callback::new(move |()| {
        let next = theme_service.with_value(|svc| svc.toggle());
        set_theme.set(next);
    });

    // Popover
    let popover: StoredValue<DomPopover, LocalStorage> = StoredValue::new_local(DomPopover::new(
        DomLayoutProbe,
        WindowAutoUpdate,
        DomFocusManager,
        options.popover(),
    ));
    let (open, set_open) = signal(false);
    let (position, set_position) = signal(None::<Point>);

    popover.with_value(|c| {
        c.set_listener(move |snap| {
            let _ = set_open.try_set(snap.open);
            let _ = set_position.try_set(snap.position);
        });
    });

    let trigger_ref = NodeRef::<html::Button>::new();
    Effect::new(move |_| {
        if let Some(trigger) = trigger_ref.get() {
            popover.with_value(|c| c.set_reference(Some(trigger.into())));
        }
    });

    // Outside press / escape, only while open.
    let dismiss_guards = StoredValue::new_local(Vec::<ListenerGuard>::new());
    Effect::new(move |_| {
        if !open.get() {
            dismiss_guards.set_value(Vec::new());
            return;
        }
        let is_inside = move |node: &Node| {
            let in_trigger = trigger_ref
                .get_untracked()
                .is_some_and(|t| t.contains(Some(node)));
            let in_panel = document()
                .get_element_by_id(PANEL_ID)
                .is_some_and(|p| p.contains(Some(node)));
            in_trigger || in_panel
        };
        let on_dismiss = move |reason: DismissReason| {
            popover.with_value(|c| c.dismiss(reason));
        };
        dismiss_guards.set_value(listen_dismiss(is_inside, on_dismiss));
    });

    on_cleanup(move || {
        dismiss_guards.try_update_value(Vec::clear);
        popover.try_with_value(|c| c.dismiss(DismissReason::Unmount));
    });

    let expanded = move || ReferenceAria::new(PANEL_ID, open.get()).expanded();
    let controls = move || ReferenceAria::new(PANEL_ID, open.get()).controls;

    view! {
        <nav class="flex w-full h-16 items-center md:justify-normal justify-center">
            <Logo/>
            <div class="flex-grow md:grid px-20 hidden">
                <button
                    id=TRIGGER_ID
                    type="button"
                    class="justify-self-end"
                    node_ref=trigger_ref
                    aria-haspopup=PANEL_ROLE
                    aria-expanded=expanded
                    aria-controls=controls
                    aria-label=move || theme.get().trigger_icon().label()
                    on:click=move |_| popover.with_value(|c| c.toggle())
                >
                    <ThemeIcon theme=theme/>
                </button>
                <Show when=move || open.get()>
                    <ThemePopover
                        popover=popover
                        position=position
                        theme=theme
                        on_toggle=on_toggle
                    />
                </Show>
            </div>
            <NavLinks/>
        </nav>
    }
}
