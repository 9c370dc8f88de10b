use crate::error::{DatasetError, Result};
use crate::pollutant::{Measure, Pollutant};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One row of the pollution dataset.
///
/// Header names follow the published CSV. Columns not listed here are
/// ignored; an empty measurement cell deserializes to `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PollutionRecord {
    #[serde(rename = "State")]
    pub state: String,
    #[serde(rename = "City")]
    pub city: String,
    #[serde(rename = "Time_zone")]
    pub time_zone: String,
    #[serde(rename = "Date")]
    pub date: NaiveDate,

    #[serde(rename = "O3 Mean")]
    pub o3_mean: Option<f64>,
    #[serde(rename = "O3 1st Max Hour")]
    pub o3_max_hour: Option<u32>,
    #[serde(rename = "O3 AQI")]
    pub o3_aqi: Option<f64>,

    #[serde(rename = "CO Mean")]
    pub co_mean: Option<f64>,
    #[serde(rename = "CO 1st Max Hour")]
    pub co_max_hour: Option<u32>,
    #[serde(rename = "CO AQI")]
    pub co_aqi: Option<f64>,

    #[serde(rename = "SO2 Mean")]
    pub so2_mean: Option<f64>,
    #[serde(rename = "SO2 1st Max Hour")]
    pub so2_max_hour: Option<u32>,
    #[serde(rename = "SO2 AQI")]
    pub so2_aqi: Option<f64>,

    #[serde(rename = "NO2 Mean")]
    pub no2_mean: Option<f64>,
    #[serde(rename = "NO2 1st Max Hour")]
    pub no2_max_hour: Option<u32>,
    #[serde(rename = "NO2 AQI")]
    pub no2_aqi: Option<f64>,
}

/// The three measurements of a single pollutant on one row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PollutantReading {
    pub mean: Option<f64>,
    pub aqi: Option<f64>,
    pub first_max_hour: Option<u32>,
}

impl PollutionRecord {
    pub fn reading(&self, pollutant: Pollutant) -> PollutantReading {
        match pollutant {
            Pollutant::O3 => PollutantReading {
                mean: self.o3_mean,
                aqi: self.o3_aqi,
                first_max_hour: self.o3_max_hour,
            },
            Pollutant::SO2 => PollutantReading {
                mean: self.so2_mean,
                aqi: self.so2_aqi,
                first_max_hour: self.so2_max_hour,
            },
            Pollutant::NO2 => PollutantReading {
                mean: self.no2_mean,
                aqi: self.no2_aqi,
                first_max_hour: self.no2_max_hour,
            },
            Pollutant::CO => PollutantReading {
                mean: self.co_mean,
                aqi: self.co_aqi,
                first_max_hour: self.co_max_hour,
            },
        }
    }

    /// Checks the constraints serde cannot express: text keys are
    /// non-blank and every first max hour is an hour of the day.
    pub fn validate(&self) -> Result<()> {
        if self.state.trim().is_empty() {
            return Err(DatasetError::MissingField("State"));
        }
        if self.city.trim().is_empty() {
            return Err(DatasetError::MissingField("City"));
        }
        if self.time_zone.trim().is_empty() {
            return Err(DatasetError::MissingField("Time_zone"));
        }
        for pollutant in Pollutant::ALL {
            if let Some(hour) = self.reading(pollutant).first_max_hour {
                if hour > 23 {
                    return Err(DatasetError::HourOutOfRange {
                        column: pollutant.header(Measure::FirstMaxHour),
                        state: self.state.clone(),
                        city: self.city.clone(),
                        date: crate::dates::format_date(&self.date),
                        hour,
                    });
                }
            }
        }
        Ok(())
    }
}
