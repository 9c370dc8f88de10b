//! Tab 2: ozone AQI against a second pollutant's AQI across one state's cities.

use super::{loaded_db, report, use_purge_on_unmount};
use aqw_chart_ui::components::{ChartContainer, ChartHeader, SecondaryPollutantRadio, StateSelector};
use aqw_chart_ui::js_bridge;
use aqw_chart_ui::state::AppState;
use aqw_views::air_quality_view;
use dioxus::prelude::*;

const SCATTER_ID: &str = "aqi-scatter";
const OZONE_BOX_ID: &str = "aqi-ozone-box";
const SECONDARY_BOX_ID: &str = "aqi-secondary-box";

const INTRO: &str = "The Air Quality Index condenses pollutant concentrations into a single \
health-oriented scale. Choose a state and a pollutant to see how its AQI moves with ozone's \
across that state's cities, with a trend line per city, and how widely each index varies \
from city to city. Extreme days are screened out before the comparison.";

const WHO_LINK: &str = "https://www.who.int/publications/i/item/9789240034228";

#[component]
pub fn AirQualityTab() -> Element {
    let mut state = use_context::<AppState>();
    let selected_state = state.air_quality.read().state.clone();

    use_effect(move || {
        let selection = state.air_quality.read().clone();
    use_purge_on_unmount(vec![
        SCATTER_ID.to_string(),
        OZONE_BOX_ID.to_string(),
        SECONDARY_BOX_ID.to_string(),
    ]);
        let Some(db) = loaded_db(&state) else {
            return;
        };
        match air_quality_view(&db, &selection) {
            Ok(view) => {
                js_bridge::render_figure(SCATTER_ID, &view.scatter);
                js_bridge::render_figure(OZONE_BOX_ID, &view.ozone_box);
                js_bridge::render_figure(SECONDARY_BOX_ID, &view.secondary_box);
            }
            Err(e) => report(state, "Air quality", e),
        }
    });

    rsx! {
        ChartHeader {
            title: "Decoding Air Quality".to_string(),
            intro: INTRO.to_string(),
            link: Some((
                "More details on the Air Quality Index".to_string(),
                WHO_LINK.to_string(),
            )),
        }
        div {
            style: "display: flex; flex-wrap: wrap; gap: 24px; align-items: flex-start;",
            StateSelector {
                id: "aqi-state".to_string(),
                selected: selected_state,
                on_change: move |name: String| state.air_quality.write().state = Some(name),
            }
            SecondaryPollutantRadio {}
        }
        ChartContainer { id: SCATTER_ID.to_string() }
        div {
            style: "display: flex; gap: 16px;",
            ChartContainer { id: OZONE_BOX_ID.to_string(), width_percent: 50 }
            ChartContainer { id: SECONDARY_BOX_ID.to_string(), width_percent: 50 }
        }
    }
}
