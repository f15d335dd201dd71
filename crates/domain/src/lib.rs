//! # themenav-domain
//!
//! Pure domain model for the theme-aware navigation bar.
//!
//! ## Responsibilities
//! - Define the **theme** value (`light` / `dark`) and what it drives in the UI
//!   (marker class, trigger icon, compass rotation)
//! - Define the **resolution rule** that picks the initial theme from the
//!   persisted slot and the OS color-scheme signal
//! - Define the **popover** open/closed state machine and its dismiss reasons
//! - Define **placement geometry** for the floating panel
//! - Define **accessibility** attributes and **focus cycling** for the panel
//! - Define the static **navigation links** and asset paths
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;

pub mod aria;
pub mod focus;
pub mod geometry;
pub mod nav;
pub mod popover;
pub mod resolution;
pub mod theme;
