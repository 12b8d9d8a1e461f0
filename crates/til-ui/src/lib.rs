//! TIL UI Components
//!
//! Presentational Dioxus components shared by the TIL pages. None of them
//! talk to the contract; they take values and event handlers as props.
//!
//! Colors come from CSS custom properties set by the app theme:
//! - **Accent (`--accent`)**: primary buttons, active tab, links
//! - **Muted (`--text-muted`)**: timestamps, placeholders
//! - **Danger (`--danger`)**: error banners

pub mod components;

pub use components::*;
