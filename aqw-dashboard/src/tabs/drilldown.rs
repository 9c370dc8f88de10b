//! Tab 3: hover a state on the scatter to open its daily series.

use super::{loaded_db, report, use_purge_on_unmount};
use aqw_chart_ui::components::{ChartContainer, ChartHeader, DateRangePicker, PollutantSelector};
use aqw_chart_ui::js_bridge::{self, ChartEvent};
use aqw_chart_ui::state::AppState;
use aqw_charts::ChartTarget;
use aqw_core::{DateRange, Pollutant};
use aqw_views::drilldown_view;
use dioxus::prelude::*;

const SCATTER_ID: &str = "drilldown-scatter";
const DAILY_MEAN_ID: &str = "drilldown-daily-mean";
const DAILY_HOUR_ID: &str = "drilldown-daily-hour";

const INTRO: &str = "Every state is one point: its summed mean concentration against the \
average hour of its daily peak. Hover a point to pull up that state's day-by-day readings \
within the chosen window, and follow how concentration and peak timing move together.";

fn pollutant_options() -> Vec<(Pollutant, String)> {
    [Pollutant::O3, Pollutant::CO, Pollutant::NO2, Pollutant::SO2]
        .into_iter()
        .map(|p| (p, p.label()))
        .collect()
}

#[component]
pub fn DrilldownTab() -> Element {
    let mut state = use_context::<AppState>();
    let selection = state.drilldown.read().clone();
    use_purge_on_unmount(vec![
        SCATTER_ID.to_string(),
        DAILY_MEAN_ID.to_string(),
        DAILY_HOUR_ID.to_string(),
    ]);

    // Forward scatter hovers into the selection for as long as the tab is mounted
    use_hook(move || {
        spawn(async move {
            let mut events = js_bridge::listen_for(SCATTER_ID, ChartEvent::Hover);
            while let Ok(target) = events.recv::<ChartTarget>().await {
                log::debug!("[AQW Debug] drilldown hover {:?}", target);
                state.drilldown.write().hover = Some(target);
            }
        });
    });

    use_effect(move || {
        let selection = state.drilldown.read().clone();
        let Some(db) = loaded_db(&state) else {
            return;
        };
        match drilldown_view(&db, &selection) {
            Ok(view) => {
                js_bridge::render_figure(SCATTER_ID, &view.scatter);
                js_bridge::render_figure(DAILY_MEAN_ID, &view.daily_mean);
                js_bridge::render_figure(DAILY_HOUR_ID, &view.daily_max_hour);
            }
            Err(e) => report(state, "Drill-down", e),
        }
    });

    rsx! {
        ChartHeader {
            title: "Pollution Pathways: An Interactive Exploration".to_string(),
            intro: INTRO.to_string(),
        }
        div {
            style: "display: flex; flex-wrap: wrap; gap: 16px; align-items: center;",
            PollutantSelector {
                id: "drilldown-pollutant".to_string(),
                options: pollutant_options(),
                selected: selection.pollutant,
                on_change: move |p: Pollutant| state.drilldown.write().pollutant = p,
            }
            DateRangePicker {
                id: "drilldown-dates".to_string(),
                range: selection.range,
                on_change: move |range: Option<DateRange>| state.drilldown.write().range = range,
            }
        }
        ChartContainer { id: SCATTER_ID.to_string() }
        div {
            style: "display: flex; gap: 16px;",
            ChartContainer { id: DAILY_MEAN_ID.to_string(), width_percent: 50 }
            ChartContainer { id: DAILY_HOUR_ID.to_string(), width_percent: 50 }
        }
    }
}
