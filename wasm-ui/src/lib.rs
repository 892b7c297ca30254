//! Web UI for playground-rs
//!
//! A Yew-based web interface: a source editor, a compile log, and the canvas
//! that compiled projects render into.

mod app;
pub mod components;
pub mod script;
pub mod transport;

use wasm_bindgen::prelude::*;

/// Entry point for the WASM application.
#[wasm_bindgen(start)]
pub fn run_app() {
    // Initialize panic hook for better error messages
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    // Mount the Yew app
    yew::Renderer::<app::App>::new().render();
}
