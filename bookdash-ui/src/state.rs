//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use bookdash_data::BookCatalog;
use dioxus::prelude::*;

/// Shared application state for the dashboard.
///
/// The catalog is read-only after load; the widget signals are the three
/// inputs of the reactive recompute.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Loaded book catalog (None until the startup fetch completes)
    pub catalog: Signal<Option<BookCatalog>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Distinct author values, in first-appearance order
    pub authors: Signal<Vec<String>>,
    /// Upper bound for the page slider (dataset maximum)
    pub max_pages_bound: Signal<u32>,
    /// Currently selected authors (may be empty)
    pub selected_authors: Signal<Vec<String>>,
    /// Current page-count threshold
    pub max_pages: Signal<u32>,
    /// Theme switch: true is dark mode
    pub dark_mode: Signal<bool>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            catalog: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            authors: Signal::new(Vec::new()),
            max_pages_bound: Signal::new(0),
            selected_authors: Signal::new(Vec::new()),
            max_pages: Signal::new(0),
            dark_mode: Signal::new(false),
        }
    }
}
