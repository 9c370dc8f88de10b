//! Drill-down tab: a state-level scatter whose hovered point opens that
//! state's daily series.

use crate::selection::DrilldownSelection;
use aqw_charts::palette::series_color;
use aqw_charts::{Figure, Layout, Line, Marker, Mode, ScatterTrace, SeriesIndex, Trace};
use aqw_core::dates::format_date;
use aqw_core::Pollutant;
use aqw_db::models::{DailyPeakSummary, StatePeakSummary};
use aqw_db::Database;
use serde::Serialize;

/// Title of both daily charts until a state is hovered.
pub const DRILLDOWN_PLACEHOLDER: &str = "Hover over a state to see its daily readings";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrilldownView {
    pub scatter: Figure,
    /// States in scatter trace order.
    pub states: SeriesIndex,
    /// State whose daily charts are shown, if any.
    pub resolved_state: Option<String>,
    pub daily_mean: Figure,
    pub daily_max_hour: Figure,
}

pub fn scatter_title(pollutant: Pollutant) -> String {
    format!(
        "Scatter Plot of {} Mean Concentration vs First Max Hour by State",
        pollutant.code()
    )
}

pub fn drilldown_view(
    db: &Database,
    selection: &DrilldownSelection,
) -> anyhow::Result<DrilldownView> {
    let pollutant = selection.pollutant;
    let peaks = db.query_state_peaks(pollutant)?;
    let states = SeriesIndex::new(peaks.iter().map(|p| p.state.clone()).collect());
    let scatter = state_scatter(&peaks, pollutant);

    let resolved_state = match (&selection.range, &selection.hover) {
        (Some(_), Some(target)) => states.resolve(target).map(str::to_string),
        (None, Some(_)) => {
            log::debug!("drilldown: hover ignored without a date range");
            None
        }
        _ => None,
    };

    let (daily_mean, daily_max_hour) = match (&resolved_state, &selection.range) {
        (Some(state), Some(range)) => {
            let days = db.query_daily_peaks(pollutant, state, range)?;
            log::info!(
                "[AQW Debug] drilldown: {} daily rows for {}",
                days.len(),
                state
            );
            daily_figures(&days, pollutant, state)
        }
        _ => (
            Figure::empty(DRILLDOWN_PLACEHOLDER),
            Figure::empty(DRILLDOWN_PLACEHOLDER),
        ),
    };

    Ok(DrilldownView {
        scatter,
        states,
        resolved_state,
        daily_mean,
        daily_max_hour,
    })
}

fn state_scatter(peaks: &[StatePeakSummary], pollutant: Pollutant) -> Figure {
    let traces = peaks
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let mut trace = ScatterTrace::new(
                Some(p.state.clone()),
                vec![p.mean_sum].into(),
                vec![p.avg_max_hour].into(),
                Mode::Markers,
            );
            trace.marker = Some(Marker {
                color: Some(series_color(i).to_string()),
                size: Some(10.0),
            });
            Trace::Scatter(trace)
        })
        .collect();

    let layout = Layout::new(&scatter_title(pollutant)).with_axes(
        format!("{} Concentration (ppm,Sum)", pollutant.code()),
        format!("{} First Max Hour", pollutant.code()),
    );
    Figure::new(traces, layout)
}

fn daily_figures(days: &[DailyPeakSummary], pollutant: Pollutant, state: &str) -> (Figure, Figure) {
    let dates: Vec<String> = days.iter().map(|d| format_date(&d.date)).collect();

    let mut mean = ScatterTrace::new(
        Some(state.to_string()),
        dates.clone().into(),
        days.iter().map(|d| d.mean_sum).collect::<Vec<_>>().into(),
        Mode::Lines,
    );
    mean.line = Some(Line::colored(series_color(0)));

    let mut hour = ScatterTrace::new(
        Some(state.to_string()),
        dates.into(),
        days.iter().map(|d| d.avg_max_hour).collect::<Vec<_>>().into(),
        Mode::Lines,
    );
    hour.line = Some(Line::colored(series_color(1)));

    let code = pollutant.code();
    let mean_fig = Figure::new(
        if days.is_empty() { Vec::new() } else { vec![Trace::Scatter(mean)] },
        Layout::new(&format!("Average {} (ppm) for {}", code, state))
            .with_axes("Date", format!("{} Mean (ppm)", code)),
    );
    let hour_fig = Figure::new(
        if days.is_empty() { Vec::new() } else { vec![Trace::Scatter(hour)] },
        Layout::new(&format!("{} 1st Max Hour for {}", code, state))
            .with_axes("Date", format!("{} 1st Max Hour", code)),
    );
    (mean_fig, hour_fig)
}
