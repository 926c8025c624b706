//! Fatal load error panel.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
}

/// Shown instead of the dashboard when the startup load fails.
///
/// A failed load is fatal: no widget bounds can be derived, so no controls
/// or chart are rendered alongside this panel.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            style: "padding: 16px; margin: 24px 0; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A;",
            strong { "The dashboard could not start. " }
            "{props.message}"
        }
    }
}
