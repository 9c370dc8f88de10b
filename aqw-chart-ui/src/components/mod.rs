//! Reusable Dioxus RSX components for the air quality dashboard.

mod chart_container;
mod chart_header;
mod date_range_picker;
mod error_display;
mod loading_spinner;
mod narrative;
mod pollutant_selector;
mod secondary_pollutant_radio;
mod state_selector;
mod tab_bar;
mod time_zone_selector;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use date_range_picker::DateRangePicker;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use narrative::Narrative;
pub use pollutant_selector::PollutantSelector;
pub use secondary_pollutant_radio::SecondaryPollutantRadio;
pub use state_selector::StateSelector;
pub use tab_bar::TabBar;
pub use time_zone_selector::TimeZoneSelector;
