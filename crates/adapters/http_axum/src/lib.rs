//! # themenav-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the compiled navbar site (the trunk `dist/` output)
//! - Answer every page path (`/`, `/about`, `/explore`) with the site shell
//!   so each link lands on a working page
//! - Serve static assets (`/logo.svg`, `/compass.svg`, the WASM bundle)
//! - Expose `/health` for liveness checks
//!
//! ## Dependency rule
//! Depends on `themenav-domain` for the list of page paths. Never leaks axum
//! types into the domain.

pub mod router;
pub mod site;
