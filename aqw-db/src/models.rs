//! Query result model structs.
//!
//! All structs derive `Serialize` so they can be handed to the chart
//! builders and dumped as JSON by the CLI.

use aqw_core::PerPollutant;
use chrono::NaiveDate;
use serde::Serialize;

/// Sums of the four pollutant means for one state on one day.
///
/// Missing readings contribute nothing to a sum, so a group whose inputs
/// are all NULL sums to `0.0`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StateDateSums {
    pub state: String,
    pub date: NaiveDate,
    pub means: PerPollutant<f64>,
}

/// Sums of the four pollutant means for one city over a date range.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StateCitySums {
    pub state: String,
    pub city: String,
    pub means: PerPollutant<f64>,
}

/// Average AQI of each pollutant for one city on one day.
///
/// `None` when every reading for that pollutant in the group is missing.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CityDateAqi {
    pub city: String,
    pub date: NaiveDate,
    pub aqi: PerPollutant<Option<f64>>,
}

/// One point of the state scatter: summed mean concentration and average
/// first max hour of a single pollutant.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StatePeakSummary {
    pub state: String,
    pub mean_sum: f64,
    pub avg_max_hour: Option<f64>,
}

/// Daily totals for one state and one pollutant.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DailyPeakSummary {
    pub date: NaiveDate,
    pub mean_sum: f64,
    pub avg_max_hour: Option<f64>,
}

/// Every recorded first max hour of one pollutant in one city, in row order.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CityPeakHours {
    pub city: String,
    pub hours: Vec<u32>,
}

/// Shape of the loaded dataset.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DatasetSummary {
    pub rows: usize,
    pub states: usize,
    pub cities: usize,
    pub time_zones: Vec<String>,
    pub first_date: Option<NaiveDate>,
    pub last_date: Option<NaiveDate>,
}
