//! # themenav-adapter-navbar-leptos
//!
//! Client-side navigation bar with a light/dark theme popover, built with
//! Leptos (CSR) and compiled to WASM.
//!
//! - [`browser`] implements the theme ports on top of `localStorage`,
//!   `matchMedia` and the class list of `<html>`.
//! - [`floating`] implements the popover ports on top of the DOM.
//! - [`components`] holds the view layer.
//!
//! No `tracing` subscriber is installed in the browser. Failures the theme
//! service absorbs reach the console through its reporter and
//! `leptos::logging`, like every other warning in this crate.

use leptos::prelude::*;

pub mod browser;
pub mod components;
pub mod floating;
pub mod options;

pub use components::Navbar;
pub use options::NavbarOptions;

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <div class="text-black dark:text-white h-full min-h-screen w-full dark:bg-slate-950 bg-slate-50">
            <Navbar/>
        </div>
    }
}
