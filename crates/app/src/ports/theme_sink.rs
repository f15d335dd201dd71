//! Theme sink port: the marker class on the document root.

use std::rc::Rc;

use themenav_domain::theme::Theme;

/// Where the active theme becomes visible.
///
/// Downstream styling keys off the presence of a single marker class, so
/// the sink only needs to set it and report it back.
pub trait ThemeSink {
    /// Add or remove the marker class to match `theme`.
    fn apply(&self, theme: Theme);

    /// Theme currently reflected by the marker class, `None` when the root
    /// element is unreachable.
    fn read(&self) -> Option<Theme>;
}

impl<T: ThemeSink + ?Sized> ThemeSink for Rc<T> {
    fn apply(&self, theme: Theme) {
        (**self).apply(theme);
    }

    fn read(&self) -> Option<Theme> {
        (**self).read()
    }
}
