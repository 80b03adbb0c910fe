//! Outlay
//!
//! Browser-based expense tracker built with Leptos (WASM).
//!
//! # Features
//!
//! - Token-based login and registration
//! - Expense entry with client-side validation
//! - Expense table with delete and edit actions
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It communicates with the expense API over HTTP; the API
//! itself is an external service, typically served at `localhost:8000`.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
