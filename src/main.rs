//! Scholar Dashboard
//!
//! Learner-facing dashboard for the Scholar education platform, built
//! with Leptos (WASM).
//!
//! # Features
//!
//! - Stat cards for XP, streaks and completed work
//! - Progress rings and bars for level and topic completion
//! - Placeholder maths content (subject and topic catalogue)
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles
//! to WebAssembly. All data is local: static course content plus a
//! learner profile cached in the browser's localStorage.

use leptos::*;

mod app;
mod components;
mod content;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
