//! One component per dashboard tab.

mod air_quality;
mod distribution;
mod drilldown;
mod time_series;

pub use air_quality::AirQualityTab;
pub use distribution::DistributionTab;
pub use drilldown::DrilldownTab;
pub use time_series::TimeSeriesTab;

use aqw_chart_ui::js_bridge;
use aqw_chart_ui::state::AppState;
use aqw_db::Database;
use dioxus::prelude::*;

/// The loaded database, if any. Cloned out of the signal so the read
/// borrow ends before the view runs.
pub(crate) fn loaded_db(state: &AppState) -> Option<Database> {
    state.db.read().clone()
}

/// Record a view failure where the error banner can show it.
pub(crate) fn report(mut state: AppState, view: &str, err: anyhow::Error) {
    log::error!("[AQW] {} view failed: {:#}", view, err);
    state.error_msg.set(Some(format!("{} view failed: {:#}", view, err)));
}

/// Purge the Plotly charts in `ids` when the calling tab unmounts, so their
/// resize handlers do not outlive the containers.
pub(crate) fn use_purge_on_unmount(ids: Vec<String>) {
    use_drop(move || {
        for id in &ids {
            js_bridge::destroy_chart(id);
        }
    });
}
