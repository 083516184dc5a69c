//! Pillbox
//!
//! Medication schedule registration form built with Leptos (WASM).
//!
//! # Features
//!
//! - Fixed-times or fixed-interval dosing schedules
//! - Submission to the medication REST API
//! - Optional messaging-platform login for authenticated submission
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It communicates with the medication API via HTTP.

use leptos::*;

mod api;
mod app;
mod auth;
mod components;
mod config;
mod form;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
