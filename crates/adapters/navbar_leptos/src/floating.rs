//! DOM implementations of the popover ports, plus the dismiss and focus-trap
//! listeners the panel installs while it is open.
//!
//! Every listener is owned by a [`ListenerGuard`]; dropping the guard
//! removes the listener, so nothing outlives the open panel.

use std::rc::Rc;

use themenav_app::ports::{AutoUpdate, FocusManager, LayoutProbe};
use themenav_app::services::popover_controller::PopoverController;
use themenav_domain::focus::next_focus_index;
use themenav_domain::geometry::{Rect, Size};
use themenav_domain::popover::{DismissReason, DocumentEvent};
use wasm_bindgen::prelude::*;
use web_sys::{Event, EventTarget, HtmlElement, KeyboardEvent, Node};

/// Elements that can take keyboard focus inside the panel.
pub const FOCUSABLE: &str =
    "button:not([disabled]), [href], input, select, textarea, [tabindex]:not([tabindex='-1'])";

/// Popover controller wired to the DOM.
pub type DomPopover =
    PopoverController<HtmlElement, DomLayoutProbe, WindowAutoUpdate, DomFocusManager>;

/// An event listener that is removed when the guard is dropped.
pub struct ListenerGuard {
    target: EventTarget,
    event: &'static str,
    capture: bool,
    callback: Closure<dyn FnMut(Event)>,
}

impl ListenerGuard {
    /// Attach `handler` to `target`. Returns `None` if the browser refuses
    /// the listener.
    pub fn listen(
        target: &EventTarget,
        event: &'static str,
        capture: bool,
        handler: impl FnMut(Event) + 'static,
    ) -> Option<Self> {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        if let Err(err) = target.add_event_listener_with_callback_and_bool(
            event,
            callback.as_ref().unchecked_ref(),
            capture,
        ) {
            leptos::logging::warn!("failed to add {event} listener: {err:?}");
            return None;
        }
        Some(Self {
            target: target.clone(),
            event,
            capture,
            callback,
        })
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        let _ = self.target.remove_event_listener_with_callback_and_bool(
            self.event,
            self.callback.as_ref().unchecked_ref(),
            self.capture,
        );
    }
}

/// Measures elements with `getBoundingClientRect` and offset sizes.
#[derive(Debug, Clone, Copy, Default)]
pub struct DomLayoutProbe;

impl LayoutProbe<HtmlElement> for DomLayoutProbe {
    fn reference_rect(&self, reference: &HtmlElement) -> Option<Rect> {
        if !reference.is_connected() {
            return None;
        }
        let rect = reference.get_bounding_client_rect();
        Some(Rect {
            x: rect.x(),
            y: rect.y(),
            width: rect.width(),
            height: rect.height(),
        })
    }

    fn floating_size(&self, floating: &HtmlElement) -> Option<Size> {
        if !floating.is_connected() {
            return None;
        }
        Some(Size {
            width: f64::from(floating.offset_width()),
            height: f64::from(floating.offset_height()),
        })
    }
}

/// Window `scroll` (capture phase, so nested scroll containers count) and
/// `resize` notifications.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowAutoUpdate;

/// Keeps the auto-update listeners alive. Drop to unsubscribe.
pub struct AutoUpdateHandle {
    _listeners: Vec<ListenerGuard>,
}

impl AutoUpdate for WindowAutoUpdate {
    type Subscription = AutoUpdateHandle;

    fn subscribe(&self, on_change: Rc<dyn Fn()>) -> AutoUpdateHandle {
        let Some(window) = web_sys::window() else {
            return AutoUpdateHandle {
                _listeners: Vec::new(),
            };
        };
        let listeners = [("scroll", true), ("resize", false)]
            .into_iter()
            .filter_map(|(event, capture)| {
                let on_change = Rc::clone(&on_change);
                ListenerGuard::listen(&window, event, capture, move |_| on_change())
            })
            .collect();
        AutoUpdateHandle {
            _listeners: listeners,
        }
    }
}

/// Moves focus with `HTMLElement.focus()`.
///
/// Focus into the panel is deferred to the next animation frame: the
/// controller asks for it as soon as a position exists, but the style that
/// makes the panel visible is only written once the current handler returns.
#[derive(Debug, Clone, Copy, Default)]
pub struct DomFocusManager;

impl DomFocusManager {
    fn focus_first(floating: &HtmlElement) {
        if !floating.is_connected() {
            return;
        }
        let first = floating
            .query_selector(FOCUSABLE)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());
        let target = first.as_ref().unwrap_or(floating);
        if let Err(err) = target.focus() {
            leptos::logging::warn!("failed to focus theme panel: {err:?}");
        }
    }
}

impl FocusManager<HtmlElement> for DomFocusManager {
    fn focus_within(&self, floating: &HtmlElement) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let floating = floating.clone();
        let callback = Closure::once_into_js(move || Self::focus_first(&floating));
        if let Err(err) = window.request_animation_frame(callback.unchecked_ref()) {
            leptos::logging::warn!("failed to schedule panel focus: {err:?}");
        }
    }

    fn focus(&self, reference: &HtmlElement) {
        if let Err(err) = reference.focus() {
            leptos::logging::warn!("failed to return focus to theme trigger: {err:?}");
        }
    }
}

/// Install the outside-press and escape listeners on the document.
///
/// `is_inside` decides whether a pressed node belongs to the trigger or the
/// panel. The returned guards must be kept for as long as the panel is open.
pub fn listen_dismiss(
    is_inside: impl Fn(&Node) -> bool + 'static,
    on_dismiss: impl Fn(DismissReason) + 'static,
) -> Vec<ListenerGuard> {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    let on_dismiss = Rc::new(on_dismiss);

    let on_press = {
        let on_dismiss = Rc::clone(&on_dismiss);
        move |ev: Event| {
            let Some(node) = ev.target().and_then(|t| t.dyn_into::<Node>().ok()) else {
                return;
            };
            let event = DocumentEvent::PointerDown {
                inside: is_inside(&node),
            };
            if let Some(reason) = DismissReason::for_event(event) {
                on_dismiss(reason);
            }
        }
    };
    let on_key = move |ev: Event| {
        let Some(key) = ev.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) else {
            return;
        };
        if let Some(reason) = DismissReason::for_event(DocumentEvent::KeyDown { key: &key }) {
            on_dismiss(reason);
        }
    };

    [
        ListenerGuard::listen(&document, "pointerdown", false, on_press),
        ListenerGuard::listen(&document, "keydown", false, on_key),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Keep Tab / Shift+Tab cycling inside `panel`.
pub fn trap_tab(panel: &HtmlElement, ev: &KeyboardEvent) {
    if ev.key() != "Tab" {
        return;
    }
    let Ok(nodes) = panel.query_selector_all(FOCUSABLE) else {
        return;
    };
    let focusable: Vec<HtmlElement> = (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect();

    let active = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.active_element());
    let current = active.as_ref().and_then(|active| {
        let active: &Node = active;
        focusable
            .iter()
            .position(|el| el.is_same_node(Some(active)))
    });

    if let Some(next) = next_focus_index(current, focusable.len(), ev.shift_key()) {
        ev.prevent_default();
        let _ = focusable[next].focus();
    }
}
