//! The four dashboard tabs as pure functions of `(database, selection)`.
//!
//! Each view runs its grouping queries, derives whatever statistics its
//! charts need and returns ready-to-render [`aqw_charts::Figure`]s. Nothing
//! is cached between calls. Missing selections, empty results and stale
//! hover/click targets all degrade to empty or placeholder figures; the only
//! error a view returns is a database failure.

pub mod air_quality;
pub mod distribution;
pub mod drilldown;
pub mod narrative;
pub mod selection;
pub mod time_series;

pub use air_quality::{air_quality_view, AirQualityView};
pub use distribution::{distribution_view, DistributionView};
pub use drilldown::{drilldown_view, DrilldownView};
pub use selection::{
    AirQualitySelection, DistributionSelection, DrilldownSelection, TimeSeriesSelection,
};
pub use time_series::{time_series_view, TimeSeriesView};
