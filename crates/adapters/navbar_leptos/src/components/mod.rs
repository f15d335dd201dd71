mod compass_toggle;
mod icons;
mod nav_links;
mod navbar;
mod theme_popover;

pub use compass_toggle::{CompassToggle, compass_style};
pub use icons::ThemeIcon;
pub use nav_links::{Logo, NavLinks};
pub use navbar::Navbar;
pub use theme_popover::ThemePopover;

/// Id of the trigger button, referenced by the panel's `aria-labelledby`.
pub const TRIGGER_ID: &str = "theme-trigger";

/// Id of the floating panel, referenced by the trigger's `aria-controls`.
pub const PANEL_ID: &str = "theme-panel";
