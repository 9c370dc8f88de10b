//! Control values for each tab.
//!
//! The dashboard owns these and passes them by reference; views never
//! keep them.

use aqw_charts::ChartTarget;
use aqw_core::{DateRange, Pollutant, SecondaryPollutant};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const DEFAULT_TIME_ZONE: &str = "Mountain Time Zone";
pub const DEFAULT_STATE: &str = "Arizona";

/// 2010-01-01 through 2010-01-31.
pub fn default_date_range() -> Option<DateRange> {
    DateRange::from_bounds(
        NaiveDate::from_ymd_opt(2010, 1, 1),
        NaiveDate::from_ymd_opt(2010, 1, 31),
    )
}

/// Arizona when the dataset has it, otherwise the first state listed.
pub fn default_state(states: &[String]) -> Option<String> {
    states
        .iter()
        .find(|s| s.as_str() == DEFAULT_STATE)
        .or_else(|| states.first())
        .cloned()
}

/// Mountain Time Zone when the dataset has it, otherwise the first listed.
pub fn default_time_zone(time_zones: &[String]) -> Option<String> {
    time_zones
        .iter()
        .find(|tz| tz.as_str() == DEFAULT_TIME_ZONE)
        .or_else(|| time_zones.first())
        .cloned()
}

/// Time series tab: time zone, pollutant mean and inclusive date range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesSelection {
    pub time_zone: String,
    pub pollutant: Pollutant,
    pub range: Option<DateRange>,
}

impl Default for TimeSeriesSelection {
    fn default() -> Self {
        Self {
            time_zone: DEFAULT_TIME_ZONE.to_string(),
            pollutant: Pollutant::O3,
            range: default_date_range(),
        }
    }
}

/// AQI tab: state and the pollutant compared against ozone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirQualitySelection {
    pub state: Option<String>,
    pub secondary: SecondaryPollutant,
}

impl Default for AirQualitySelection {
    fn default() -> Self {
        Self {
            state: Some(DEFAULT_STATE.to_string()),
            secondary: SecondaryPollutant::default(),
        }
    }
}

/// Drill-down tab: pollutant, date range and the state scatter point
/// currently under the pointer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrilldownSelection {
    pub pollutant: Pollutant,
    pub range: Option<DateRange>,
    pub hover: Option<ChartTarget>,
}

impl Default for DrilldownSelection {
    fn default() -> Self {
        Self {
            pollutant: Pollutant::O3,
            range: default_date_range(),
            hover: None,
        }
    }
}

/// Distribution tab: state, pollutant and the last clicked city curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionSelection {
    pub state: Option<String>,
    pub pollutant: Pollutant,
    pub click: Option<ChartTarget>,
}

impl Default for DistributionSelection {
    fn default() -> Self {
        Self {
            state: Some(DEFAULT_STATE.to_string()),
            pollutant: Pollutant::O3,
            click: None,
        }
    }
}
