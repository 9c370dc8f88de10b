//! Tab 1: pollutant means over time by state.

use super::{loaded_db, report, use_purge_on_unmount};
use aqw_chart_ui::components::{
    ChartContainer, ChartHeader, DateRangePicker, Narrative, PollutantSelector, TimeZoneSelector,
};
use aqw_chart_ui::js_bridge;
use aqw_chart_ui::state::AppState;
use aqw_core::{DateRange, Pollutant};
use aqw_views::time_series_view;
use dioxus::prelude::*;

const LINE_ID: &str = "time-series-line";
const SUNBURST_ID: &str = "time-series-sunburst";

const INTRO: &str = "Tracking pollutant concentrations over time shows how air quality \
moves across the country: long-term trends, seasonal swings and short-lived spikes at \
individual monitoring sites. Pick a time zone, a pollutant and a date window to compare \
the daily mean levels of every state in that zone, then see how each state's total splits \
across its cities.";

fn pollutant_options() -> Vec<(Pollutant, String)> {
    [Pollutant::O3, Pollutant::SO2, Pollutant::NO2, Pollutant::CO]
        .into_iter()
        .map(|p| (p, format!("Average {} Emissions", p.label())))
        .collect()
}

#[component]
pub fn TimeSeriesTab() -> Element {
    let mut state = use_context::<AppState>();
    let mut narrative = use_signal(String::new);
    let selection = state.time_series.read().clone();
    use_purge_on_unmount(vec![LINE_ID.to_string(), SUNBURST_ID.to_string()]);

    // Re-render whenever the selection changes
    use_effect(move || {
        let selection = state.time_series.read().clone();
        let Some(db) = loaded_db(&state) else {
            return;
        };
        match time_series_view(&db, &selection) {
            Ok(view) => {
                js_bridge::render_figure(LINE_ID, &view.line);
                js_bridge::render_figure(SUNBURST_ID, &view.sunburst);
                narrative.set(view.narrative);
            }
            Err(e) => report(state, "Time series", e),
        }
    });

    rsx! {
        ChartHeader {
            title: "Atmospheric Watch: Pollution Over Time".to_string(),
            intro: INTRO.to_string(),
        }
        div {
            style: "display: flex; flex-wrap: wrap; gap: 16px; align-items: center;",
            TimeZoneSelector {}
            PollutantSelector {
                id: "time-series-pollutant".to_string(),
                options: pollutant_options(),
                selected: selection.pollutant,
                on_change: move |p: Pollutant| state.time_series.write().pollutant = p,
            }
            DateRangePicker {
                id: "time-series-dates".to_string(),
                range: selection.range,
                on_change: move |range: Option<DateRange>| state.time_series.write().range = range,
            }
        }
        ChartContainer { id: LINE_ID.to_string() }
        div {
            style: "display: flex; gap: 16px; align-items: center;",
            ChartContainer { id: SUNBURST_ID.to_string(), width_percent: 50 }
            Narrative { text: narrative() }
        }
    }
}
