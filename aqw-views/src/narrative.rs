//! Narrative text for the time series tab.

use aqw_core::dates::format_date;
use aqw_core::Season;
use chrono::NaiveDate;
use serde::Serialize;

pub const NO_DATA: &str = "No data available.";

/// A (state, date) cell holding an extreme value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyExtreme {
    pub state: String,
    pub date: NaiveDate,
    pub value: f64,
}

/// Max, min, mean and median of a per-(state, date) series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesSummary {
    pub max: DailyExtreme,
    pub max_season: Season,
    pub min: DailyExtreme,
    pub mean: f64,
    pub median: f64,
}

/// The paragraph under the sunburst. `selector` is the dropdown value,
/// e.g. "O3_Mean".
pub fn describe(selector: &str, summary: Option<&SeriesSummary>) -> String {
    let Some(s) = summary else {
        return NO_DATA.to_string();
    };
    format!(
        "The highest recorded level of {sel} was observed in {max_state}, reaching {max:.3}. \
         This level signifies significant {sel} pollution. Time series analysis reveals seasonal \
         fluctuations, particularly peaking during {season} months. For instance, on {max_date}, \
         {sel} levels spiked to {max:.3}, emphasizing the health risks associated with elevated \
         {sel} concentrations during {season} seasons. Conversely, {min_state} exhibits the lowest \
         {sel} levels, recorded at {min:.3} on {min_date}, suggesting effective pollution control \
         measures or geographical advantages. On average, across all states, {sel} levels remain \
         around {mean:.3}, with a median value of {median:.3}, indicating the typical distribution \
         of {sel} concentrations across the dataset.",
        sel = selector,
        max_state = s.max.state,
        max = s.max.value,
        season = s.max_season,
        max_date = format_date(&s.max.date),
        min_state = s.min.state,
        min = s.min.value,
        min_date = format_date(&s.min.date),
        mean = s.mean,
        median = s.median,
    )
}
