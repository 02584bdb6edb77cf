//! Application state managed via Dioxus context.
//!
//! `AppState` bundles the reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;

/// Shared state of the chart page.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Whether the chart request is still in flight
    pub loading: Signal<bool>,
    /// Number of rows in the drawn chart; stays `None` when the container
    /// shows an error instead
    pub row_count: Signal<Option<usize>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            loading: Signal::new(true),
            row_count: Signal::new(None),
        }
    }
}
