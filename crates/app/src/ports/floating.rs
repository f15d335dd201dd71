//! Floating capability: the single interface every popover implementation
//! exposes to the view layer.

use themenav_domain::geometry::Point;
use themenav_domain::popover::DismissReason;

/// Trigger + floating panel pair.
pub trait FloatingAdapter {
    /// Element handle used for the trigger and the panel.
    type Handle;

    /// Register (or clear) the trigger element.
    fn set_reference(&self, reference: Option<Self::Handle>);

    /// Register (or clear) the panel element. The panel only exists while
    /// open, so this is called again every time it mounts.
    fn set_floating(&self, floating: Option<Self::Handle>);

    fn is_open(&self) -> bool;

    /// Open, or close for `reason`. Closing an already closed panel is a no-op.
    fn set_open(&self, open: bool, reason: Option<DismissReason>);

    /// Panel position, `None` while closed or not yet measurable.
    fn computed_position(&self) -> Option<Point>;
}
