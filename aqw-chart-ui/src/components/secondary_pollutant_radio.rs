//! Radio group choosing the pollutant compared against ozone on the AQI tab.

use crate::state::AppState;
use aqw_core::SecondaryPollutant;
use dioxus::prelude::*;

#[component]
pub fn SecondaryPollutantRadio() -> Element {
    let mut state = use_context::<AppState>();
    let selected = state.air_quality.read().secondary;
    let choices: Vec<(SecondaryPollutant, String, String)> = SecondaryPollutant::ALL
        .iter()
        .map(|&s| {
            let label = format!("{} Air Quality Index", s.pollutant().label());
            (s, s.to_string(), label)
        })
        .collect();

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; flex-direction: column; gap: 4px;",
            for (secondary, code, label) in choices {
                label {
                    key: "{code}",
                    input {
                        r#type: "radio",
                        name: "secondary-aqi",
                        value: "{code}",
                        checked: secondary == selected,
                        onchange: move |_| state.air_quality.write().secondary = secondary,
                    }
                    " {label}"
                }
            }
        }
    }
}
