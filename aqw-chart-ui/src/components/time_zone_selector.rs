//! Dropdown selector for the time series tab's time zone.

use crate::state::AppState;
use dioxus::prelude::*;

/// Time zone dropdown.
/// Reads available time zones from AppState and updates the time series selection.
#[component]
pub fn TimeZoneSelector() -> Element {
    let mut state = use_context::<AppState>();
    let zones = state.time_zones.read().clone();
    let selected = state.time_series.read().time_zone.clone();

    let on_change = move |evt: Event<FormData>| {
        state.time_series.write().time_zone = evt.value();
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "time-zone-select",
                style: "font-weight: bold; margin-right: 8px;",
                "Time zone: "
            }
            select {
                id: "time-zone-select",
                onchange: on_change,
                for zone in zones.iter() {
                    option {
                        value: "{zone}",
                        selected: *zone == selected,
                        "{zone}"
                    }
                }
            }
        }
    }
}
