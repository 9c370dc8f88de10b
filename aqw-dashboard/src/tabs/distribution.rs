//! Tab 4: peak hour densities per city; click a city for its histograms.

use super::{loaded_db, report, use_purge_on_unmount};
use aqw_chart_ui::components::{ChartContainer, ChartHeader, PollutantSelector, StateSelector};
use aqw_chart_ui::js_bridge::{self, ChartEvent};
use aqw_chart_ui::state::AppState;
use aqw_charts::ChartTarget;
use aqw_core::Pollutant;
use aqw_views::distribution::CITY_HISTOGRAM_ORDER;
use aqw_views::distribution_view;
use dioxus::prelude::*;

const DENSITY_ID: &str = "distribution-density";

const INTRO: &str = "When in the day does pollution peak? For the chosen state and pollutant, \
each city's first-max-hour readings are drawn as a normalised histogram with a smoothed \
density curve on top. Click a city's curve to break its peaks down by pollutant.";

fn histogram_id(pollutant: Pollutant) -> String {
    format!("distribution-hist-{}", pollutant.code().to_lowercase())
}

fn pollutant_options() -> Vec<(Pollutant, String)> {
    [Pollutant::O3, Pollutant::CO, Pollutant::NO2, Pollutant::SO2]
        .into_iter()
        .map(|p| (p, p.code().to_string()))
        .collect()
}

#[component]
pub fn DistributionTab() -> Element {
    let mut state = use_context::<AppState>();
    let selection = state.distribution.read().clone();
    let histogram_ids: Vec<String> = CITY_HISTOGRAM_ORDER.iter().map(|&p| histogram_id(p)).collect();
    let mut chart_ids = vec![DENSITY_ID.to_string()];
    chart_ids.extend(histogram_ids.iter().cloned());
    use_purge_on_unmount(chart_ids);

    use_hook(move || {
        spawn(async move {
            let mut events = js_bridge::listen_for(DENSITY_ID, ChartEvent::Click);
            while let Ok(target) = events.recv::<ChartTarget>().await {
                log::debug!("[AQW Debug] distribution click {:?}", target);
                state.distribution.write().click = Some(target);
            }
        });
    });

    use_effect(move || {
        let selection = state.distribution.read().clone();
        let Some(db) = loaded_db(&state) else {
            return;
        };
        match distribution_view(&db, &selection) {
            Ok(view) => {
                js_bridge::render_figure(DENSITY_ID, &view.density);
                for (pollutant, figure) in CITY_HISTOGRAM_ORDER.iter().zip(&view.city_histograms) {
                    js_bridge::render_figure(&histogram_id(*pollutant), figure);
                }
            }
            Err(e) => report(state, "Distribution", e),
        }
    });

    rsx! {
        ChartHeader {
            title: "Pollution Profiles: State and City Emission Distributions".to_string(),
            intro: INTRO.to_string(),
        }
        div {
            style: "display: flex; flex-wrap: wrap; gap: 16px; align-items: center;",
            StateSelector {
                id: "distribution-state".to_string(),
                selected: selection.state.clone(),
                on_change: move |name: String| {
                    let mut selection = state.distribution.write();
                    selection.state = Some(name);
                    selection.click = None;
                },
            }
            PollutantSelector {
                id: "distribution-pollutant".to_string(),
                options: pollutant_options(),
                selected: selection.pollutant,
                on_change: move |p: Pollutant| state.distribution.write().pollutant = p,
            }
        }
        ChartContainer { id: DENSITY_ID.to_string() }
        div {
            style: "display: flex; flex-wrap: wrap; gap: 16px;",
            for id in histogram_ids {
                div {
                    key: "{id}",
                    style: "width: calc(50% - 8px);",
                    ChartContainer { id: id.clone(), min_height: 350 }
                }
            }
        }
    }
}
