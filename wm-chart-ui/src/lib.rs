//! Shared Dioxus components and Google Charts bridge for the weight trend chart.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the Google Charts drawing code via `js_sys::eval()`
//! - `browser`: `fetch`-backed data source and DOM chart surface for the pipeline
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (chart container, range links)

pub mod browser;
pub mod components;
pub mod js_bridge;
pub mod state;
