//! Popover controller: open/close state, positioning and focus for the
//! theme panel.
//!
//! The position is recomputed through an [`AutoUpdate`] subscription that
//! only exists while the panel is open. The subscription is a guard stored
//! in the controller, so closing the panel or dropping the controller
//! (unmount) removes every listener it installed.
//!
//! Focus moves into the panel only once a position has been computed. Until
//! then the panel is rendered hidden and cannot take focus.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use themenav_domain::geometry::{DEFAULT_OFFSET, Placement, Point, compute_position};
use themenav_domain::popover::{DismissReason, PopoverState};

use crate::ports::{AutoUpdate, FloatingAdapter, FocusManager, LayoutProbe};

/// Placement settings for the panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PopoverOptions {
    pub placement: Placement,
    pub offset: f64,
}

impl Default for PopoverOptions {
    fn default() -> Self {
        Self {
            placement: Placement::Bottom,
            offset: DEFAULT_OFFSET,
        }
    }
}

/// What the view layer needs to render after a change.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PopoverSnapshot {
    pub open: bool,
    pub position: Option<Point>,
}

type Listener = Rc<dyn Fn(PopoverSnapshot)>;

struct Inner<H, L, F> {
    layout: L,
    focus: F,
    options: PopoverOptions,
    state: Cell<PopoverState>,
    reference: RefCell<Option<H>>,
    floating: RefCell<Option<H>>,
    position: Cell<Option<Point>>,
    focus_pending: Cell<bool>,
    listener: RefCell<Option<Listener>>,
}

impl<H, L, F> Inner<H, L, F>
where
    L: LayoutProbe<H>,
    F: FocusManager<H>,
{
    fn is_open(&self) -> bool {
        self.state.get().is_open()
    }

    fn update_position(&self) {
        if !self.is_open() {
            return;
        }
        let reference = self.reference.borrow();
        let floating = self.floating.borrow();
        let position = match (reference.as_ref(), floating.as_ref()) {
            (Some(reference), Some(floating)) => {
                match (
                    self.layout.reference_rect(reference),
                    self.layout.floating_size(floating),
                ) {
                    (Some(rect), Some(size)) => compute_position(
                        rect,
                        size,
                        self.options.placement,
                        self.options.offset,
                    ),
                    _ => None,
                }
            }
            _ => None,
        };
        drop((reference, floating));

        if position != self.position.get() {
            self.position.set(position);
            self.notify();
        }
        if position.is_some() && self.focus_pending.replace(false) {
            if let Some(floating) = self.floating.borrow().as_ref() {
                self.focus.focus_within(floating);
            }
        }
    }

    fn snapshot(&self) -> PopoverSnapshot {
        PopoverSnapshot {
            open: self.is_open(),
            position: self.position.get(),
        }
    }

    fn notify(&self) {
        let listener = self.listener.borrow().clone();
        if let Some(listener) = listener {
            listener(self.snapshot());
        }
    }
}

/// Drives one trigger/panel pair.
///
/// `H` is the element handle shared by the layout and focus ports.
pub struct PopoverController<H, L, U, F>
where
    U: AutoUpdate,
{
    inner: Rc<Inner<H, L, F>>,
    auto_update: U,
    subscription: RefCell<Option<U::Subscription>>,
}

impl<H, L, U, F> PopoverController<H, L, U, F>
where
    H: 'static,
    L: LayoutProbe<H> + 'static,
    U: AutoUpdate,
    F: FocusManager<H> + 'static,
{
    pub fn new(layout: L, auto_update: U, focus: F, options: PopoverOptions) -> Self {
        Self {
            inner: Rc::new(Inner {
                layout,
                focus,
                options,
                state: Cell::new(PopoverState::new()),
                reference: RefCell::new(None),
                floating: RefCell::new(None),
                position: Cell::new(None),
                focus_pending: Cell::new(false),
                listener: RefCell::new(None),
            }),
            auto_update,
            subscription: RefCell::new(None),
        }
    }

    /// Called with a fresh snapshot after every visible change.
    pub fn set_listener(&self, listener: impl Fn(PopoverSnapshot) + 'static) {
        *self.inner.listener.borrow_mut() = Some(Rc::new(listener));
    }

    /// Trigger activation.
    pub fn toggle(&self) {
        if self.is_open() {
            self.set_open(false, Some(DismissReason::TriggerToggle));
        } else {
            self.set_open(true, None);
        }
    }

    /// Close for `reason`. No-op when already closed.
    pub fn dismiss(&self, reason: DismissReason) {
        self.set_open(false, Some(reason));
    }

    #[must_use]
    pub fn snapshot(&self) -> PopoverSnapshot {
        self.inner.snapshot()
    }

    #[cfg(test)]
    fn is_tracking(&self) -> bool {
        self.subscription.borrow().is_some()
    }

    fn open(&self) {
        let mut state = self.inner.state.get();
        if state.is_open() {
            return;
        }
        state.toggle();
        self.inner.state.set(state);
        self.inner.focus_pending.set(true);

        let weak: Weak<Inner<H, L, F>> = Rc::downgrade(&self.inner);
        let on_change: Rc<dyn Fn()> = Rc::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.update_position();
            }
        });
        *self.subscription.borrow_mut() = Some(self.auto_update.subscribe(on_change));
        tracing::debug!("theme popover opened");

        self.inner.notify();
        self.inner.update_position();
    }

    fn close(&self, reason: DismissReason) {
        let mut state = self.inner.state.get();
        if state.dismiss(reason).is_none() {
            return;
        }
        self.inner.state.set(state);
        self.subscription.borrow_mut().take();
        self.inner.position.set(None);
        self.inner.focus_pending.set(false);
        tracing::debug!(reason = ?reason, "theme popover closed");

        self.inner.notify();
        let reference = self.inner.reference.borrow();
        if let Some(reference) = reference.as_ref().filter(|_| reason.returns_focus()) {
            self.inner.focus.focus(reference);
        }
    }
}

impl<H, L, U, F> FloatingAdapter for PopoverController<H, L, U, F>
where
    H: 'static,
    L: LayoutProbe<H> + 'static,
    U: AutoUpdate,
    F: FocusManager<H> + 'static,
{
    type Handle = H;

    fn set_reference(&self, reference: Option<H>) {
        *self.inner.reference.borrow_mut() = reference;
        self.inner.update_position();
    }

    fn set_floating(&self, floating: Option<H>) {
        let mounted = floating.is_some();
        let freshly_mounted = self.inner.floating.borrow().is_none() && mounted;
        *self.inner.floating.borrow_mut() = floating;
        if freshly_mounted && self.is_open() {
            self.inner.focus_pending.set(true);
        }
        if mounted {
            self.inner.update_position();
        }
    }

    fn is_open(&self) -> bool {
        self.inner.is_open()
    }

    fn set_open(&self, open: bool, reason: Option<DismissReason>) {
        if open {
            self.open();
        } else {
            self.close(reason.unwrap_or(DismissReason::TriggerToggle));
        }
    }

    fn computed_position(&self) -> Option<Point> {
        self.inner.position.get()
    }
}

impl<H, L, U, F> Drop for PopoverController<H, L, U, F>
where
    U: AutoUpdate,
{
    fn drop(&mut self) {
        if self.subscription.get_mut().take().is_some() {
            tracing::debug!("theme popover unmounted while open, auto-update removed");
        }
    }
}
