//! Interquartile-range outlier trimming.

use crate::stats::quantile_sorted;
use serde::Serialize;

/// Multiplier applied to the IQR when none is given.
pub const IQR_THRESHOLD: f64 = 1.5;

/// Inclusive bounds `[Q1 - t*IQR, Q3 + t*IQR]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IqrBounds {
    pub q1: f64,
    pub q3: f64,
    pub lower: f64,
    pub upper: f64,
}

impl IqrBounds {
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }
}

/// Bounds for one column. NaN values are ignored; `None` if nothing is left.
pub fn iqr_bounds(values: &[f64], threshold: f64) -> Option<IqrBounds> {
    let mut sorted: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
    if sorted.is_empty() {
        return None;
    }
    sorted.sort_by(f64::total_cmp);
    let q1 = quantile_sorted(&sorted, 0.25)?;
    let q3 = quantile_sorted(&sorted, 0.75)?;
    let iqr = q3 - q1;
    Some(IqrBounds {
        q1,
        q3,
        lower: q1 - threshold * iqr,
        upper: q3 + threshold * iqr,
    })
}

/// Drops rows whose value in any of `columns` falls outside that column's
/// IQR bounds.
///
/// Columns are applied one after another and each pass computes its
/// quartiles over the rows retained by the previous passes. A row with no
/// value in the column under test is dropped, as is every row when the
/// column holds no values at all. The input slice is left untouched.
pub fn remove_outliers_iqr<T, C>(
    rows: &[T],
    columns: &[C],
    threshold: f64,
    value: impl Fn(&T, &C) -> Option<f64>,
) -> Vec<T>
where
    T: Clone,
{
    let mut retained: Vec<T> = rows.to_vec();
    for column in columns {
        if retained.is_empty() {
            break;
        }
        let present: Vec<f64> = retained.iter().filter_map(|row| value(row, column)).collect();
        let before = retained.len();
        match iqr_bounds(&present, threshold) {
            Some(bounds) => {
                retained.retain(|row| value(row, column).is_some_and(|v| bounds.contains(v)));
            }
            None => retained.clear(),
        }
        log::debug!(
            "outliers: column pass kept {} of {} rows",
            retained.len(),
            before
        );
    }
    retained
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        a: Option<f64>,
        b: Option<f64>,
    }

    fn pick(row: &Row, column: &&str) -> Option<f64> {
        match *column {
            "a" => row.a,
            _ => row.b,
        }
    }

    #[test]
    fn test_bounds_for_known_column() {
        let bounds = iqr_bounds(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0], IQR_THRESHOLD).unwrap();
        assert_eq!(bounds.q1, 2.75);
        assert_eq!(bounds.q3, 6.25);
        assert_eq!(bounds.iqr(), 3.5);
        assert_eq!(bounds.lower, 2.75 - 5.25);
        assert_eq!(bounds.upper, 6.25 + 5.25);
        assert!(iqr_bounds(&[], IQR_THRESHOLD).is_none());
    }

    #[test]
    fn test_removes_single_outlier() {
        let rows: Vec<Row> = [10.0, 11.0, 12.0, 13.0, 14.0, 500.0]
            .iter()
            .map(|&v| Row { a: Some(v), b: Some(1.0) })
            .collect();
        let kept = remove_outliers_iqr(&rows, &["a"], IQR_THRESHOLD, pick);
        assert_eq!(kept.len(), 5);
        assert!(kept.iter().all(|r| r.a.unwrap() < 100.0));
        assert_eq!(rows.len(), 6);
    }

    #[test]
    fn test_missing_values_are_dropped() {
        let rows = vec![
            Row { a: Some(1.0), b: Some(1.0) },
            Row { a: None, b: Some(1.0) },
            Row { a: Some(1.0), b: None },
        ];
        let kept = remove_outliers_iqr(&rows, &["a", "b"], IQR_THRESHOLD, pick);
        assert_eq!(kept, vec![rows[0].clone()]);
    }

    #[test]
    fn test_empty_column_drops_everything() {
        let rows = vec![Row { a: None, b: Some(1.0) }, Row { a: None, b: Some(2.0) }];
        assert!(remove_outliers_iqr(&rows, &["a", "b"], IQR_THRESHOLD, pick).is_empty());
    }

    #[test]
    fn test_empty_table_stays_empty() {
        let rows: Vec<Row> = Vec::new();
        assert!(remove_outliers_iqr(&rows, &["a", "b"], IQR_THRESHOLD, pick).is_empty());
    }

    proptest! {
        #[test]
        fn prop_filter_never_grows_and_respects_bounds(
            values in prop::collection::vec((0.0f64..300.0, 0.0f64..300.0), 0..80)
        ) {
            let rows: Vec<Row> = values.iter().map(|&(a, b)| Row { a: Some(a), b: Some(b) }).collect();
            let kept = remove_outliers_iqr(&rows, &["a", "b"], IQR_THRESHOLD, pick);
            prop_assert!(kept.len() <= rows.len());

            // Replay the passes: every kept row lies within the bounds of
            // each pass it went through.
            let mut stage = rows.clone();
            for column in ["a", "b"] {
                let present: Vec<f64> = stage.iter().filter_map(|r| pick(r, &column)).collect();
                if let Some(bounds) = iqr_bounds(&present, IQR_THRESHOLD) {
                    for row in &kept {
                        prop_assert!(bounds.contains(pick(row, &column).unwrap()));
                    }
                    stage.retain(|r| bounds.contains(pick(r, &column).unwrap()));
                }
            }
            prop_assert_eq!(stage, kept);
        }
    }
}
