use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An inclusive calendar date range.
#[derive(Clone, Eq, PartialEq, Copy, Debug, Serialize, Deserialize)]
pub struct DateRange(pub NaiveDate, pub NaiveDate);

impl DateRange {
    /// Builds a range from optional picker bounds. Both must be present.
    pub fn from_bounds(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Option<DateRange> {
        match (start, end) {
            (Some(start), Some(end)) => Some(DateRange(start, end)),
            _ => None,
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.0
    }

    pub fn end(&self) -> NaiveDate {
        self.1
    }

    pub fn contains(&self, date: &NaiveDate) -> bool {
        self.0 <= *date && *date <= self.1
    }

    /// A range whose start is after its end holds no dates.
    pub fn is_empty(&self) -> bool {
        self.0 > self.1
    }
}
