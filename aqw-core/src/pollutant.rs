//! The four measured pollutants and their per-pollutant measurement columns.

use crate::error::DatasetError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A pollutant tracked by the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Pollutant {
    O3,
    SO2,
    NO2,
    CO,
}

impl Pollutant {
    /// Column order of the source dataset.
    pub const ALL: [Pollutant; 4] = [Pollutant::O3, Pollutant::SO2, Pollutant::NO2, Pollutant::CO];

    /// Chemical formula as written in CSV headers ("O3", "SO2", ...).
    pub fn code(&self) -> &'static str {
        match self {
            Pollutant::O3 => "O3",
            Pollutant::SO2 => "SO2",
            Pollutant::NO2 => "NO2",
            Pollutant::CO => "CO",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Pollutant::O3 => "Ozone",
            Pollutant::SO2 => "Sulfur Dioxide",
            Pollutant::NO2 => "Nitrogen Dioxide",
            Pollutant::CO => "Carbon Monoxide",
        }
    }

    /// Display label, e.g. "Ozone (O3)".
    pub fn label(&self) -> String {
        format!("{} ({})", self.name(), self.code())
    }

    /// Header of the measurement column in the source CSV, e.g. "O3 1st Max Hour".
    pub fn header(&self, measure: Measure) -> String {
        format!("{} {}", self.code(), measure.header_suffix())
    }

    /// Column name in the SQLite `records` table, e.g. "o3_max_hour".
    ///
    /// Built only from this closed enumeration, so it is safe to splice into SQL.
    pub fn sql_column(&self, measure: Measure) -> &'static str {
        match (self, measure) {
            (Pollutant::O3, Measure::Mean) => "o3_mean",
            (Pollutant::O3, Measure::Aqi) => "o3_aqi",
            (Pollutant::O3, Measure::FirstMaxHour) => "o3_max_hour",
            (Pollutant::SO2, Measure::Mean) => "so2_mean",
            (Pollutant::SO2, Measure::Aqi) => "so2_aqi",
            (Pollutant::SO2, Measure::FirstMaxHour) => "so2_max_hour",
            (Pollutant::NO2, Measure::Mean) => "no2_mean",
            (Pollutant::NO2, Measure::Aqi) => "no2_aqi",
            (Pollutant::NO2, Measure::FirstMaxHour) => "no2_max_hour",
            (Pollutant::CO, Measure::Mean) => "co_mean",
            (Pollutant::CO, Measure::Aqi) => "co_aqi",
            (Pollutant::CO, Measure::FirstMaxHour) => "co_max_hour",
        }
    }

    /// Selector value used by the time-series pollutant dropdown, e.g. "O3_Mean".
    pub fn mean_selector(&self) -> String {
        format!("{}_Mean", self.code())
    }
}

impl fmt::Display for Pollutant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Pollutant {
    type Err = DatasetError;

    /// Accepts the bare code ("no2") or a selector value ("NO2_Mean", "NO2_AQI").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().split(['_', ' ']).next().unwrap_or("");
        Pollutant::ALL
            .into_iter()
            .find(|p| p.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| DatasetError::UnknownPollutant(s.to_string()))
    }
}

/// The three measurements recorded per pollutant per row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Measure {
    /// Mean concentration, parts per million
    Mean,
    /// Air Quality Index
    Aqi,
    /// Hour of day (0–23) of the daily peak reading
    FirstMaxHour,
}

impl Measure {
    pub fn header_suffix(&self) -> &'static str {
        match self {
            Measure::Mean => "Mean",
            Measure::Aqi => "AQI",
            Measure::FirstMaxHour => "1st Max Hour",
        }
    }
}

/// One value per pollutant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PerPollutant<T> {
    pub o3: T,
    pub so2: T,
    pub no2: T,
    pub co: T,
}

impl<T> PerPollutant<T> {
    pub fn get(&self, pollutant: Pollutant) -> &T {
        match pollutant {
            Pollutant::O3 => &self.o3,
            Pollutant::SO2 => &self.so2,
            Pollutant::NO2 => &self.no2,
            Pollutant::CO => &self.co,
        }
    }

    pub fn get_mut(&mut self, pollutant: Pollutant) -> &mut T {
        match pollutant {
            Pollutant::O3 => &mut self.o3,
            Pollutant::SO2 => &mut self.so2,
            Pollutant::NO2 => &mut self.no2,
            Pollutant::CO => &mut self.co,
        }
    }
}

/// The pollutant plotted against Ozone on the AQI tab.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SecondaryPollutant {
    #[default]
    CO,
    SO2,
    NO2,
}

impl SecondaryPollutant {
    pub const ALL: [SecondaryPollutant; 3] =
        [SecondaryPollutant::CO, SecondaryPollutant::SO2, SecondaryPollutant::NO2];

    pub fn pollutant(&self) -> Pollutant {
        match self {
            SecondaryPollutant::CO => Pollutant::CO,
            SecondaryPollutant::SO2 => Pollutant::SO2,
            SecondaryPollutant::NO2 => Pollutant::NO2,
        }
    }
}

impl TryFrom<Pollutant> for SecondaryPollutant {
    type Error = DatasetError;

    fn try_from(value: Pollutant) -> Result<Self, Self::Error> {
        match value {
            Pollutant::CO => Ok(SecondaryPollutant::CO),
            Pollutant::SO2 => Ok(SecondaryPollutant::SO2),
            Pollutant::NO2 => Ok(SecondaryPollutant::NO2),
            Pollutant::O3 => Err(DatasetError::InvalidSecondaryPollutant(value.to_string())),
        }
    }
}

impl FromStr for SecondaryPollutant {
    type Err = DatasetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<Pollutant>()?.try_into()
    }
}

impl fmt::Display for SecondaryPollutant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.pollutant().fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_codes_and_selector_values() {
        assert_eq!("O3".parse::<Pollutant>().unwrap(), Pollutant::O3);
        assert_eq!("no2".parse::<Pollutant>().unwrap(), Pollutant::NO2);
        assert_eq!("SO2_Mean".parse::<Pollutant>().unwrap(), Pollutant::SO2);
        assert_eq!("CO_AQI".parse::<Pollutant>().unwrap(), Pollutant::CO);
        assert!("PM25".parse::<Pollutant>().is_err());
    }

    #[test]
    fn headers_match_dataset_columns() {
        assert_eq!(Pollutant::O3.header(Measure::Mean), "O3 Mean");
        assert_eq!(Pollutant::CO.header(Measure::Aqi), "CO AQI");
        assert_eq!(Pollutant::NO2.header(Measure::FirstMaxHour), "NO2 1st Max Hour");
    }

    #[test]
    fn sql_columns_are_distinct() {
        let mut seen = std::collections::HashSet::new();
        for p in Pollutant::ALL {
            for m in [Measure::Mean, Measure::Aqi, Measure::FirstMaxHour] {
                assert!(seen.insert(p.sql_column(m)));
            }
        }
        assert_eq!(seen.len(), 12);
    }

    #[test]
    fn secondary_rejects_ozone() {
        assert!(SecondaryPollutant::try_from(Pollutant::O3).is_err());
        assert_eq!("SO2_AQI".parse::<SecondaryPollutant>().unwrap(), SecondaryPollutant::SO2);
        assert_eq!(SecondaryPollutant::default().pollutant(), Pollutant::CO);
    }

    #[test]
    fn per_pollutant_indexing() {
        let mut values = PerPollutant {
            o3: 2,
            so2: 3,
            no2: 3,
            co: 2,
        };
        assert_eq!(*values.get(Pollutant::O3), 2);
        assert_eq!(*values.get(Pollutant::SO2), 3);
        *values.get_mut(Pollutant::CO) = 10;
        assert_eq!(values.co, 10);
        assert_eq!(*values.get(Pollutant::NO2), 3);
    }
}
