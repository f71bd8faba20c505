//! CrimeScope Dashboard
//!
//! Global homicide-rate dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Sortable, filterable country table with color-coded rates
//! - Per-country detail pages with client-side routing
//! - Year selection across the published indicator range
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It fetches from the REST Countries and World Bank APIs over
//! HTTP and runs the `crimescope` data pipeline in the browser.

use leptos::*;

mod api;
mod app;
mod components;
mod format;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
