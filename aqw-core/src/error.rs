/// Error types for dataset parsing and validation
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DatasetError {
    /// A pollutant code or selector value that is not one of O3, SO2, NO2, CO
    #[error("Unknown pollutant: {0}")]
    UnknownPollutant(String),

    /// O3 is the reference axis on the AQI tab and cannot be the secondary pollutant
    #[error("{0} cannot be used as the secondary AQI pollutant")]
    InvalidSecondaryPollutant(String),

    /// Date parsing failed
    #[error("Failed to parse date: {0}")]
    DateParse(String),

    /// A first-max-hour reading outside 0..=23
    #[error("{column} out of range on {date} ({state}/{city}): {hour}")]
    HourOutOfRange {
        column: String,
        state: String,
        city: String,
        date: String,
        hour: u32,
    },

    /// A required text field was blank
    #[error("Missing {0} value")]
    MissingField(&'static str),
}

/// Type alias for Results using DatasetError
pub type Result<T> = std::result::Result<T, DatasetError>;
