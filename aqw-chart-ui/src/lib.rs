//! Shared Dioxus components and Plotly.js bridge for the air quality dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers around Plotly.js via `js_sys::eval()`, plus
//!   hover/click listeners that feed chart events back into signals
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (selectors, containers, etc.)

pub mod components;
pub mod js_bridge;
pub mod state;
