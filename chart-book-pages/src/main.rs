//! Book Pages Dashboard
//!
//! Interactive dashboard over a public books dataset: pick authors, cap the
//! page count with a slider, toggle light/dark, and the bar chart of pages
//! per title re-renders.
//!
//! Data flow:
//! 1. On mount: fetch the remote books CSV (first 1000 rows) and parse it
//!    into an immutable `BookCatalog`; derive the author list and the
//!    slider bound. A failed load is fatal -- the widget session is never
//!    rendered.
//! 2. On any widget change: run the pure pipeline
//!    `filter_books` -> `ChartSpec::build` with the latest value of all
//!    three inputs and hand the fresh spec to D3.js.
//! 3. Independently of the chart, the theme switch drives a one-way write
//!    of `data-theme` on the document root so static chrome re-themes too.

use bookdash_chart::ChartSpec;
use bookdash_data::{filter_books, BookCatalog};
use bookdash_ui::components::{
    AuthorSelector, ChartContainer, ChartHeader, ErrorDisplay, LoadingSpinner, PageSlider,
    ThemeSwitch,
};
use bookdash_ui::js_bridge;
use bookdash_ui::state::AppState;
use dioxus::prelude::*;

/// Remote CSV source for the book catalog.
const BOOKS_CSV_URL: &str =
    "https://raw.githubusercontent.com/chriszapp/datasets/main/books.csv";

/// Only the first 1000 data rows are loaded.
const ROW_LIMIT: usize = 1000;

/// DOM id for the D3 chart container div.
const CHART_CONTAINER_ID: &str = "book-pages-chart";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("book-pages-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // ─── Effect 1: One-time startup load ───
    use_effect(move || {
        // Restore the persisted theme before anything renders with it.
        if let Some(dark) = js_bridge::persisted_dark_mode() {
            state.dark_mode.set(dark);
        }
        js_bridge::init_charts();

        spawn(async move {
            // Both phases fail with the same LoadError kind set; either one
            // is fatal and ends the session before any widget renders.
            let csv_text = match js_bridge::fetch_csv(BOOKS_CSV_URL).await {
                Ok(text) => text,
                Err(e) => {
                    log::error!("{}", e);
                    state.error_msg.set(Some(e.to_string()));
                    state.loading.set(false);
                    return;
                }
            };

            match BookCatalog::from_csv(&csv_text, ROW_LIMIT) {
                Ok(catalog) => {
                    let authors = catalog.authors();
                    let bound = catalog.max_pages();
                    // Default selection mirrors the widget bounds: the first
                    // author, and the slider fully open.
                    state
                        .selected_authors
                        .set(authors.first().cloned().into_iter().collect());
                    state.authors.set(authors);
                    state.max_pages_bound.set(bound);
                    state.max_pages.set(bound);
                    state.catalog.set(Some(catalog));
                    state.loading.set(false);
                }
                Err(e) => {
                    log::error!("{}", e);
                    state.error_msg.set(Some(e.to_string()));
                    state.loading.set(false);
                }
            }
        });
    });

    // ─── Effect 2: Reactive controller ───
    // Re-runs once per change batch of any of the three inputs; always uses
    // the latest value of all of them.
    use_effect(move || {
        let loading = (state.loading)();
        let selected = (state.selected_authors)();
        let max_pages = (state.max_pages)();
        let dark = (state.dark_mode)();

        if loading {
            return;
        }
        // Clone the catalog out of the signal immediately so the read borrow
        // doesn't interfere with Dioxus signal tracking.
        let catalog: Option<BookCatalog> = state.catalog.read().clone();
        let Some(catalog) = catalog else {
            return;
        };

        let filtered = filter_books(catalog.books(), &selected, max_pages);
        let spec = ChartSpec::build(&filtered, &selected, max_pages, dark);
        js_bridge::render_bar_chart(CHART_CONTAINER_ID, &spec.to_json());
    });

    // ─── Effect 3: Theme bridge ───
    // One-way write of the root attribute, decoupled from the chart path.
    use_effect(move || {
        let dark = (state.dark_mode)();
        js_bridge::apply_theme(dark);
    });

    // ─── Render ───
    let error = state.error_msg.read().clone();
    let loading = *state.loading.read();

    rsx! {
        div {
            style: "max-width: 900px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            if let Some(err) = error {
                // Fatal load failure: no widget session is served.
                ErrorDisplay { message: err }
            } else {
                if loading {
                    LoadingSpinner {}
                } else {
                    ChartHeader {
                        title: "Book Pages Dashboard".to_string(),
                        subtitle: "Select authors and a maximum page count with the slider."
                            .to_string(),
                    }

                    div {
                        style: "display: flex; justify-content: flex-end; margin: 4px 0;",
                        ThemeSwitch {}
                    }

                    ControlsRow {}

                    ChartContainer {
                        id: CHART_CONTAINER_ID.to_string(),
                    }
                }
            }
        }
    }
}

/// Filter controls laid out side by side: authors left, slider right.
#[component]
fn ControlsRow() -> Element {
    rsx! {
        div {
            style: "display: flex; gap: 16px; align-items: flex-start;",
            div {
                style: "flex: 1; min-width: 0;",
                AuthorSelector {}
            }
            div {
                style: "flex: 1; min-width: 0;",
                PageSlider {}
            }
        }
    }
}
