//! Chart header component with title and subtitle.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    /// Dashboard title
    pub title: String,
    /// Explanatory subtitle (e.g., what the controls do)
    #[props(default = String::new())]
    pub subtitle: String,
}

/// Header for the dashboard showing title and optional subtitle.
#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    rsx! {
        div {
            style: "margin-bottom: 8px;",
            h1 {
                style: "margin: 0 0 4px 0; font-size: 22px;",
                "{props.title}"
            }
            if !props.subtitle.is_empty() {
                p {
                    style: "margin: 0; font-size: 13px; color: var(--bd-muted); font-style: italic;",
                    "{props.subtitle}"
                }
            }
        }
    }
}
