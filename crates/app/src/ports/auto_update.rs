//! Auto-update port: layout-change notifications while the panel is open.

use std::rc::Rc;

/// Subscribes to events that can move the trigger (scroll, resize).
pub trait AutoUpdate {
    /// Guard returned by [`subscribe`](Self::subscribe).
    ///
    /// Dropping it must remove every listener it installed.
    type Subscription;

    /// Call `on_change` whenever the trigger's layout may have changed.
    fn subscribe(&self, on_change: Rc<dyn Fn()>) -> Self::Subscription;
}
