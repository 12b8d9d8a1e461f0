#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod platform;
mod theme;

use dioxus::logger::tracing::Level;

fn main() {
    // Routes tracing to the browser console
    if let Err(e) = dioxus::logger::init(Level::INFO) {
        gloo::console::warn!(format!("logger already initialized: {}", e));
    }

    tracing::info!("Starting TIL {}", env!("CARGO_PKG_VERSION"));

    dioxus::launch(app::App);
}
