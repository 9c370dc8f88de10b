//! Time series tab: pollutant means over time by state, and their
//! state/city composition.

use crate::narrative::{self, DailyExtreme, SeriesSummary};
use crate::selection::TimeSeriesSelection;
use aqw_charts::palette::{colorscale, series_color, DEEP};
use aqw_charts::{
    Figure, Layout, Line, Mode, ScatterTrace, SunburstMarker, SunburstTrace, Trace,
};
use aqw_core::dates::{format_date, format_long_date};
use aqw_core::{Pollutant, Season};
use aqw_data::extremes::{first_max_by, first_min_by};
use aqw_data::{mean, median, round_to};
use aqw_db::models::{StateCitySums, StateDateSums};
use aqw_db::Database;
use serde::Serialize;

/// Sum of a state's city sums over the selected range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StateTotal {
    pub state: String,
    pub total: f64,
}

/// Max/min/mean/median over [`StateTotal`]s. Ties go to the first state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TotalsSummary {
    pub max: StateTotal,
    pub min: StateTotal,
    pub mean: f64,
    pub median: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeSeriesView {
    pub line: Figure,
    pub sunburst: Figure,
    pub narrative: String,
    pub summary: Option<SeriesSummary>,
    pub state_totals: Vec<StateTotal>,
    pub totals_summary: Option<TotalsSummary>,
}

pub fn line_title(pollutant: Pollutant) -> String {
    format!("{} Mean Levels(ppm) Over Time by State", pollutant.code())
}

pub fn sunburst_title(pollutant: Pollutant) -> String {
    format!("{} Mean(ppm) Distribution Across States and Cities", pollutant.code())
}

/// Build the time series tab for one selection.
pub fn time_series_view(
    db: &Database,
    selection: &TimeSeriesSelection,
) -> anyhow::Result<TimeSeriesView> {
    let pollutant = selection.pollutant;
    let Some(range) = selection.range else {
        log::warn!("time_series: no date range selected");
        return Ok(TimeSeriesView {
            line: Figure::empty(&line_title(pollutant)),
            sunburst: Figure::empty(&sunburst_title(pollutant)),
            narrative: narrative::NO_DATA.to_string(),
            summary: None,
            state_totals: Vec::new(),
            totals_summary: None,
        });
    };

    let by_date = db.query_state_date_sums(&selection.time_zone, &range)?;
    let by_city = db.query_state_city_sums(&selection.time_zone, &range)?;

    let summary = summarize_series(&by_date, pollutant);
    let state_totals = state_totals(&by_city, pollutant);
    let totals_summary = summarize_totals(&state_totals);

    Ok(TimeSeriesView {
        line: line_figure(&by_date, pollutant),
        sunburst: sunburst_figure(&by_city, pollutant),
        narrative: narrative::describe(&pollutant.mean_selector(), summary.as_ref()),
        summary,
        state_totals,
        totals_summary,
    })
}

/// Extremes of the (state, date) series. Rows arrive ordered by state then
/// date, so ties resolve to the alphabetically first state and then the
/// earliest date.
pub fn summarize_series(rows: &[StateDateSums], pollutant: Pollutant) -> Option<SeriesSummary> {
    let value = |r: &&StateDateSums| *r.means.get(pollutant);
    let max = first_max_by(rows.iter(), value)?;
    let min = first_min_by(rows.iter(), value)?;
    let values: Vec<f64> = rows.iter().map(|r| *r.means.get(pollutant)).collect();
    Some(SeriesSummary {
        max: DailyExtreme {
            state: max.state.clone(),
            date: max.date,
            value: *max.means.get(pollutant),
        },
        max_season: Season::for_date(&max.date),
        min: DailyExtreme {
            state: min.state.clone(),
            date: min.date,
            value: *min.means.get(pollutant),
        },
        mean: mean(&values)?,
        median: median(&values)?,
    })
}

/// Per-state totals in state order.
pub fn state_totals(rows: &[StateCitySums], pollutant: Pollutant) -> Vec<StateTotal> {
    let mut totals: Vec<StateTotal> = Vec::new();
    for row in rows {
        let value = *row.means.get(pollutant);
        match totals.last_mut() {
            Some(last) if last.state == row.state => last.total += value,
            _ => totals.push(StateTotal {
                state: row.state.clone(),
                total: value,
            }),
        }
    }
    totals
}

pub fn summarize_totals(totals: &[StateTotal]) -> Option<TotalsSummary> {
    let max = first_max_by(totals.iter(), |t| t.total)?;
    let min = first_min_by(totals.iter(), |t| t.total)?;
    let values: Vec<f64> = totals.iter().map(|t| t.total).collect();
    Some(TotalsSummary {
        max: max.clone(),
        min: min.clone(),
        mean: mean(&values)?,
        median: median(&values)?,
    })
}

fn line_figure(rows: &[StateDateSums], pollutant: Pollutant) -> Figure {
    let mut traces: Vec<Trace> = Vec::new();
    let mut start = 0;
    while start < rows.len() {
        let state = &rows[start].state;
        let end = start + rows[start..].iter().take_while(|r| &r.state == state).count();
        let group = &rows[start..end];

        let mut trace = ScatterTrace::new(
            Some(state.clone()),
            group.iter().map(|r| format_date(&r.date)).collect::<Vec<_>>().into(),
            group.iter().map(|r| *r.means.get(pollutant)).collect::<Vec<_>>().into(),
            Mode::Lines,
        );
        trace.hovertext = Some(group.iter().map(|r| format_long_date(&r.date)).collect());
        trace.line = Some(Line::colored(series_color(traces.len())));
        traces.push(Trace::Scatter(trace));
        start = end;
    }

    let layout = Layout::new(&line_title(pollutant))
        .with_title_size(18)
        .with_axes("Date", format!("{} Mean Level (ppm)", pollutant.code()));
    Figure::new(traces, layout)
}

/// State → city sunburst. Every city is a leaf of weight one; a state's
/// colour is the mean of its cities' sums.
fn sunburst_figure(rows: &[StateCitySums], pollutant: Pollutant) -> Figure {
    let layout = Layout::new(&sunburst_title(pollutant)).with_title_size(15);
    if rows.is_empty() {
        return Figure::new(Vec::new(), layout);
    }

    let mut ids = Vec::new();
    let mut labels = Vec::new();
    let mut parents = Vec::new();
    let mut values = Vec::new();
    let mut colors = Vec::new();

    let mut start = 0;
    while start < rows.len() {
        let state = &rows[start].state;
        let end = start + rows[start..].iter().take_while(|r| &r.state == state).count();
        let cities = &rows[start..end];
        let city_values: Vec<f64> = cities.iter().map(|r| *r.means.get(pollutant)).collect();

        ids.push(state.clone());
        labels.push(state.clone());
        parents.push(String::new());
        values.push(cities.len() as f64);
        colors.push(mean(&city_values).unwrap_or(0.0));

        for (city, value) in cities.iter().zip(&city_values) {
            ids.push(format!("{}/{}", state, city.city));
            labels.push(city.city.clone());
            parents.push(state.clone());
            values.push(1.0);
            colors.push(*value);
        }
        start = end;
    }

    let city_sums: Vec<f64> = rows.iter().map(|r| *r.means.get(pollutant)).collect();
    let trace = SunburstTrace {
        ids,
        labels,
        parents,
        values,
        branchvalues: "total".to_string(),
        marker: SunburstMarker {
            colors,
            colorscale: colorscale(&DEEP),
            cmid: mean(&city_sums).map(|m| round_to(m, 3)),
            showscale: true,
        },
        hovertemplate: Some(format!(
            "%{{label}}<br>{} Mean Level=%{{color:.3f}}<extra></extra>",
            pollutant.code()
        )),
    };
    Figure::new(vec![Trace::Sunburst(trace)], layout)
}
