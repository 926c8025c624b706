//! Multi-select checkbox list for choosing authors.

use crate::state::AppState;
use dioxus::prelude::*;

/// Author multi-select.
///
/// Reads available authors from AppState and toggles membership in
/// `selected_authors` on change. Unchecking everything is allowed and
/// yields an empty chart downstream.
#[component]
pub fn AuthorSelector() -> Element {
    let state = use_context::<AppState>();
    let authors = state.authors.read().clone();
    let selected = state.selected_authors.read().clone();

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                style: "font-weight: bold; display: block; margin-bottom: 4px;",
                "Authors:"
            }
            div {
                style: "max-height: 160px; overflow-y: auto; border: 1px solid var(--bd-border); border-radius: 4px; padding: 6px; background: var(--bd-panel);",
                for author in authors.iter() {
                    AuthorCheckbox {
                        author: author.clone(),
                        checked: selected.iter().any(|a| a == author),
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct AuthorCheckboxProps {
    author: String,
    checked: bool,
}

#[component]
fn AuthorCheckbox(props: AuthorCheckboxProps) -> Element {
    let mut state = use_context::<AppState>();
    let author = props.author.clone();

    let on_change = move |evt: Event<FormData>| {
        let mut selected = state.selected_authors.read().clone();
        if evt.checked() {
            if !selected.iter().any(|a| a == &author) {
                selected.push(author.clone());
            }
        } else {
            selected.retain(|a| a != &author);
        }
        state.selected_authors.set(selected);
    };

    rsx! {
        label {
            style: "display: block; font-size: 13px; padding: 1px 0; cursor: pointer;",
            input {
                r#type: "checkbox",
                checked: props.checked,
                onchange: on_change,
            }
            " {props.author}"
        }
    }
}
