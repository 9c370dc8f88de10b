use crate::error::{DatasetError, Result};
use chrono::NaiveDate;

/// Format a NaiveDate as "YYYY-MM-DD"
pub fn format_date(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parse a date string in "YYYY-MM-DD" format
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|e| DatasetError::DateParse(format!("{}: {}", s, e)))
}

/// Long-form hover date, e.g. "January 05, 2010"
pub fn format_long_date(date: &NaiveDate) -> String {
    date.format("%B %d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_iso() {
        let date = parse_date("2010-01-05").unwrap();
        assert_eq!(format_date(&date), "2010-01-05");
    }

    #[test]
    fn test_parse_rejects_other_formats() {
        assert!(parse_date("01/05/2010").is_err());
        assert!(parse_date("").is_err());
    }

    #[test]
    fn test_long_date() {
        let date = NaiveDate::from_ymd_opt(2010, 1, 5).unwrap();
        assert_eq!(format_long_date(&date), "January 05, 2010");
    }
}
