//! U.S. Air Pollution Dashboard (2010-2023)
//!
//! Four tabs over one embedded dataset:
//! 1. Pollutant means over time by state, with a state/city sunburst
//! 2. Ozone AQI against a second pollutant's AQI across a state's cities
//! 3. A state scatter whose hovered point opens that state's daily series
//! 4. Peak hour densities per city, with per-pollutant histograms on click
//!
//! Data flow:
//! 1. `build.rs` gzip-compresses the dataset CSV into `OUT_DIR`.
//! 2. `include_bytes!` embeds the compressed file into the WASM binary.
//! 3. On mount the records are decompressed into an in-memory SQLite
//!    database and the control options (time zones, states, date bounds)
//!    are read back from it.
//! 4. Each tab re-runs its view in `aqw-views` whenever its selection
//!    changes and hands the resulting figures to Plotly.

mod tabs;

use aqw_chart_ui::components::{ErrorDisplay, LoadingSpinner, TabBar};
use aqw_chart_ui::js_bridge;
use aqw_chart_ui::state::{AppState, Tab};
use aqw_db::Database;
use aqw_views::selection::{default_state, default_time_zone};
use dioxus::prelude::*;

/// Gzip-compressed pollution CSV.
const DATASET_GZ: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/pollution.csv.gz"));

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("air-quality-root"))
        .launch(App);
}

/// Decompress the embedded dataset and read the control options from it.
fn load_dataset(mut state: AppState) -> anyhow::Result<()> {
    let db = Database::new()?;
    let rows = db.load_records_gz(DATASET_GZ)?;
    if rows == 0 {
        anyhow::bail!("the embedded dataset holds no pollution records");
    }

    let time_zones = db.query_time_zones()?;
    let states = db.query_states()?;
    let bounds = db.query_date_range()?;
    log::info!(
        "[AQW Debug] dashboard: {} rows, {} time zones, {} states",
        rows,
        time_zones.len(),
        states.len()
    );

    if let Some(zone) = default_time_zone(&time_zones) {
        state.time_series.write().time_zone = zone;
    }
    let initial_state = default_state(&states);
    state.air_quality.write().state = initial_state.clone();
    state.distribution.write().state = initial_state;

    state.time_zones.set(time_zones);
    state.states.set(states);
    state.date_bounds.set(bounds);
    state.db.set(Some(db));
    Ok(())
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // Load the dataset once on mount
    use_effect(move || {
        if let Err(e) = load_dataset(state) {
            log::error!("Failed to load pollution data: {:#}", e);
            state
                .error_msg
                .set(Some(format!("Failed to load pollution data: {:#}", e)));
        }
        state.loading.set(false);
        js_bridge::init_charts();
    });

    rsx! {
        div {
            style: "max-width: 1200px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            if let Some(err) = state.error_msg.read().as_ref() {
                ErrorDisplay { message: err.clone() }
            }

            if *state.loading.read() {
                LoadingSpinner {}
            } else if state.db.read().is_some() {
                TabBar {}
                match (state.active_tab)() {
                    Tab::TimeSeries => rsx! { tabs::TimeSeriesTab {} },
                    Tab::AirQuality => rsx! { tabs::AirQualityTab {} },
                    Tab::Drilldown => rsx! { tabs::DrilldownTab {} },
                    Tab::Distribution => rsx! { tabs::DistributionTab {} },
                }
            }
        }
    }
}
