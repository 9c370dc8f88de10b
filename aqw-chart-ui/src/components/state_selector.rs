//! Dropdown selector for choosing a state.

use crate::state::AppState;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct StateSelectorProps {
    pub id: String,
    pub selected: Option<String>,
    pub on_change: EventHandler<String>,
}

/// State dropdown.
/// Reads available states from AppState, in dataset order.
#[component]
pub fn StateSelector(props: StateSelectorProps) -> Element {
    let state = use_context::<AppState>();
    let states = state.states.read().clone();
    let selected = props.selected.clone().unwrap_or_default();

    let on_change = props.on_change;
    let handle_change = move |evt: Event<FormData>| on_change.call(evt.value());

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "{props.id}",
                style: "font-weight: bold; margin-right: 8px;",
                "State: "
            }
            select {
                id: "{props.id}",
                onchange: handle_change,
                for name in states.iter() {
                    option {
                        value: "{name}",
                        selected: *name == selected,
                        "{name}"
                    }
                }
            }
        }
    }
}
