//! Page-count threshold slider.

use crate::state::AppState;
use dioxus::prelude::*;

/// Range slider bounding the maximum page count.
///
/// Runs from 0 to the dataset maximum derived at load time; publishes the
/// committed threshold into `max_pages` as the user drags.
#[component]
pub fn PageSlider() -> Element {
    let mut state = use_context::<AppState>();
    let bound = (state.max_pages_bound)();
    let current = (state.max_pages)();

    let on_input = move |evt: Event<FormData>| {
        if let Ok(value) = evt.value().parse::<u32>() {
            state.max_pages.set(value);
        }
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                style: "font-weight: bold; display: block; margin-bottom: 4px;",
                "Maximum pages: {current}"
            }
            input {
                r#type: "range",
                min: "0",
                max: "{bound}",
                step: "1",
                value: "{current}",
                style: "width: 100%;",
                oninput: on_input,
            }
            div {
                style: "display: flex; justify-content: space-between; font-size: 11px; color: var(--bd-muted);",
                span { "0" }
                span { "{bound}" }
            }
        }
    }
}
