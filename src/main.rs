//! RoadRisk Dashboard
//!
//! Traffic accident risk dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Interactive map with click-to-select location
//! - Risk predictions from the RoadRisk backend
//! - Weather, traffic, and safety insight cards
//! - Spoken alerts for elevated risk levels
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It talks to the prediction backend over HTTP and to the
//! OpenStreetMap Nominatim service for city search.

use leptos::*;

mod api;
mod app;
mod components;
mod geolocation;
mod pages;
mod state;

use app::App;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(App);
}
