//! Settings for the navigation bar.

use themenav_app::services::popover_controller::PopoverOptions;
use themenav_domain::geometry::{DEFAULT_OFFSET, Placement};
use themenav_domain::theme::{MARKER_CLASS, STORAGE_KEY};

/// Where the theme is stored, which class marks it, and where the panel opens.
#[derive(Debug, Clone, PartialEq)]
pub struct NavbarOptions {
    /// `localStorage` key holding `"light"` or `"dark"`.
    pub storage_key: String,
    /// Class toggled on `<html>` while dark mode is active.
    pub marker_class: String,
    pub placement: Placement,
    /// Gap between trigger and panel, in pixels.
    pub offset: f64,
}

impl NavbarOptions {
    #[must_use]
    pub fn popover(&self) -> PopoverOptions {
        PopoverOptions {
            placement: self.placement,
            offset: self.offset,
        }
    }
}

impl Default for NavbarOptions {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_string(),
            marker_class: MARKER_CLASS.to_string(),
            placement: Placement::Bottom,
            offset: DEFAULT_OFFSET,
        }
    }
}
