//! Light/dark theme switch.

use crate::state::AppState;
use dioxus::prelude::*;

/// Checkbox-backed theme toggle: checked is dark mode.
///
/// Only flips the `dark_mode` signal; the theme bridge and the chart
/// recompute both subscribe to it independently.
#[component]
pub fn ThemeSwitch() -> Element {
    let mut state = use_context::<AppState>();
    let dark = (state.dark_mode)();

    let on_change = move |evt: Event<FormData>| {
        state.dark_mode.set(evt.checked());
    };

    rsx! {
        label {
            style: "display: inline-flex; align-items: center; gap: 6px; cursor: pointer; font-size: 14px;",
            span { "☀" }
            input {
                r#type: "checkbox",
                checked: dark,
                onchange: on_change,
            }
            span { "🌙" }
        }
    }
}
