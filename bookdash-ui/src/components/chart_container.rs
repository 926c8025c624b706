//! Container div the D3 bar chart renders into.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// DOM id the bar-chart script looks up before drawing
    pub id: String,
    /// Minimum height so the layout doesn't jump while D3 loads
    #[props(default = 500)]
    pub min_height: u32,
}

/// Placeholder element owned by D3.
///
/// Dioxus only renders the empty div; every recompute hands a fresh spec to
/// `renderBarChart`, which wipes and redraws the contents. Zero-bar specs
/// still draw the axes and title, so no empty-state markup lives here.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    rsx! {
        div {
            id: "{props.id}",
            style: "width: 100%; min-height: {props.min_height}px;",
        }
    }
}
