//! Chart descriptions handed to the browser renderer.
//!
//! - `figure`: the serializable figure/trace/layout model (Plotly JSON schema)
//! - `palette`: qualitative and sequential colours
//! - `series`: mapping between displayed traces and the entities they show,
//!   used to resolve hover and click payloads

pub mod figure;
pub mod palette;
pub mod series;

pub use figure::{
    Axis, BoxTrace, Figure, HistogramTrace, Layout, Line, Marker, Mode, ScatterTrace, SunburstMarker,
    SunburstTrace, Title, Trace, Values, XBins, CHART_BACKGROUND,
};
pub use series::{ChartTarget, SeriesIndex};
