//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use aqw_core::DateRange;
use aqw_db::Database;
use aqw_views::{
    AirQualitySelection, DistributionSelection, DrilldownSelection, TimeSeriesSelection,
};
use dioxus::prelude::*;

/// The four dashboard tabs, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    TimeSeries,
    AirQuality,
    Drilldown,
    Distribution,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::TimeSeries, Tab::AirQuality, Tab::Drilldown, Tab::Distribution];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::TimeSeries => "Time Series Analysis",
            Tab::AirQuality => "Air Quality Indexes",
            Tab::Drilldown => "Interactive Elements",
            Tab::Distribution => "KDE Visualization",
        }
    }
}

/// Shared application state for the dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Database instance (None until loaded)
    pub db: Signal<Option<Database>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    pub active_tab: Signal<Tab>,
    /// Time zones in dataset order
    pub time_zones: Signal<Vec<String>>,
    /// States in dataset order
    pub states: Signal<Vec<String>>,
    /// First and last date in the dataset, for the date pickers
    pub date_bounds: Signal<Option<DateRange>>,
    pub time_series: Signal<TimeSeriesSelection>,
    pub air_quality: Signal<AirQualitySelection>,
    pub drilldown: Signal<DrilldownSelection>,
    pub distribution: Signal<DistributionSelection>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            db: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            active_tab: Signal::new(Tab::default()),
            time_zones: Signal::new(Vec::new()),
            states: Signal::new(Vec::new()),
            date_bounds: Signal::new(None),
            time_series: Signal::new(TimeSeriesSelection::default()),
            air_quality: Signal::new(AirQualitySelection::default()),
            drilldown: Signal::new(DrilldownSelection::default()),
            distribution: Signal::new(DistributionSelection::default()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
