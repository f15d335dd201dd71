//! Layout port: measuring the trigger and the floating panel.

use themenav_domain::geometry::{Rect, Size};

/// Reads element geometry from the display tree.
///
/// `H` is the adapter's element handle (a DOM element, a test id, …).
pub trait LayoutProbe<H> {
    /// Viewport rectangle of the trigger, `None` if it is not laid out.
    fn reference_rect(&self, reference: &H) -> Option<Rect>;

    /// Size of the panel, `None` if it is not laid out.
    fn floating_size(&self, floating: &H) -> Option<Size>;
}
