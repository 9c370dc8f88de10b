//! Dropdown selector for choosing a pollutant.

use aqw_core::Pollutant;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct PollutantSelectorProps {
    pub id: String,
    /// `(pollutant, label)` in display order
    pub options: Vec<(Pollutant, String)>,
    pub selected: Pollutant,
    pub on_change: EventHandler<Pollutant>,
}

#[component]
pub fn PollutantSelector(props: PollutantSelectorProps) -> Element {
    let choices: Vec<(&'static str, String, bool)> = props
        .options
        .iter()
        .map(|(p, label)| (p.code(), label.clone(), *p == props.selected))
        .collect();

    let on_change = props.on_change;
    let handle_change = move |evt: Event<FormData>| match evt.value().parse::<Pollutant>() {
        Ok(pollutant) => on_change.call(pollutant),
        Err(e) => log::warn!("[AQW] ignoring pollutant selection: {}", e),
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "{props.id}",
                style: "font-weight: bold; margin-right: 8px;",
                "Pollutant: "
            }
            select {
                id: "{props.id}",
                onchange: handle_change,
                for (code, label, is_selected) in choices {
                    option {
                        value: "{code}",
                        selected: is_selected,
                        "{label}"
                    }
                }
            }
        }
    }
}
