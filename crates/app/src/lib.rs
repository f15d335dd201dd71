//! # themenav-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `PreferenceStore`: the persisted `theme` slot
//!   - `SystemPreference`: the OS color-scheme signal
//!   - `ThemeSink`: the marker class on the document root
//!   - `LayoutProbe`, `AutoUpdate`, `FocusManager`: what the popover needs
//!     from the display tree
//! - Define the **capability interface** `FloatingAdapter` shared by every
//!   popover implementation
//! - Provide the use-cases: `ThemeService` (resolve, toggle) and
//!   `PopoverController` (open/close, positioning, focus)
//!
//! ## Dependency rule
//! Depends on `themenav-domain` only. Never imports adapter crates.
//! Adapters depend on *this* crate, not the reverse.
//!
//! Everything here runs on the single UI thread, so ports take `&self` and
//! shared state uses `Rc`/`Cell` rather than `Arc`/`Mutex`.

pub mod ports;
pub mod services;
