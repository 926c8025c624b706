//! Shared Dioxus components and D3.js bridge for the book pages dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the D3.js bar chart, the root theme
//!   attribute, theme persistence, and the startup CSV fetch
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (selector, slider, switch, etc.)

pub mod components;
pub mod js_bridge;
pub mod state;
