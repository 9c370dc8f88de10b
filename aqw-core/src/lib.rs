//! Core types for the U.S. air pollution dataset (2010–2023).
//!
//! Every crate in the workspace speaks in these types:
//! - `pollutant`: the four measured gases and the per-gas measurement columns
//! - `record`: one row of the source CSV and its validation
//! - `season`: month → meteorological season lookup
//! - `date_range`: inclusive calendar date ranges
//! - `dates`: ISO/long-form date formatting helpers
//! - `error`: typed dataset errors

pub mod date_range;
pub mod dates;
pub mod error;
pub mod pollutant;
pub mod record;
pub mod season;

pub use date_range::DateRange;
pub use error::DatasetError;
pub use pollutant::{Measure, PerPollutant, Pollutant, SecondaryPollutant};
pub use record::{PollutantReading, PollutionRecord};
pub use season::Season;
