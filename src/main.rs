//! OctoFit Dashboard
//!
//! Fitness-tracking dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Overview dashboard with aggregate stats
//! - Athlete, team, activity and workout listings
//! - Leaderboard with podium and achievement badges
//! - Athlete profile editing
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It communicates with the OctoFit REST API over HTTP; every
//! view fetches its own data on mount and holds it in local signals.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;
mod theme;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
