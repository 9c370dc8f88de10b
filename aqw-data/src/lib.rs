//! Statistics used by the dashboard aggregations.
//!
//! Everything here is a pure function over slices: nothing reads the
//! dataset directly, so the same routines serve the SQL-backed views and
//! their tests.

pub mod kde;
pub mod outliers;
pub mod stats;

pub use kde::{gaussian_kde, KdeCurve, KDE_BANDWIDTH, KDE_POINTS};
pub use outliers::{iqr_bounds, remove_outliers_iqr, IqrBounds, IQR_THRESHOLD};
pub use stats::{linear_fit, mean, median, pearson, quantile, round_to, LinearFit};

/// Tie policy for max/min lookups.
///
/// When several items share the extreme value, the first one in iteration
/// order is reported. Items whose key is NaN never win.
pub mod extremes {
    /// First item holding the largest key.
    pub fn first_max_by<T>(items: impl IntoIterator<Item = T>, key: impl Fn(&T) -> f64) -> Option<T> {
        let mut best: Option<(T, f64)> = None;
        for item in items {
            let k = key(&item);
            if k.is_nan() {
                continue;
            }
            match &best {
                Some((_, current)) if k <= *current => {}
                _ => best = Some((item, k)),
            }
        }
        best.map(|(item, _)| item)
    }

    /// First item holding the smallest key.
    pub fn first_min_by<T>(items: impl IntoIterator<Item = T>, key: impl Fn(&T) -> f64) -> Option<T> {
        let mut best: Option<(T, f64)> = None;
        for item in items {
            let k = key(&item);
            if k.is_nan() {
                continue;
            }
            match &best {
                Some((_, current)) if k >= *current => {}
                _ => best = Some((item, k)),
            }
        }
        best.map(|(item, _)| item)
    }

}
