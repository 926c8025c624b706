//! Startup loading indicator.

use dioxus::prelude::*;

/// Shown while the one-time CSV fetch and parse are in flight.
#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            style: "text-align: center; padding: 60px 0; color: var(--bd-muted);",
            p { style: "margin: 0; font-size: 14px;", "Fetching the book catalog\u{2026}" }
            p { style: "margin: 4px 0 0 0; font-size: 12px;", "(first 1000 rows of the source dataset)" }
        }
    }
}
