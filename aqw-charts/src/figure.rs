//! Figure model serialized to the JSON accepted by `Plotly.react`.
//!
//! Only the attributes the dashboard uses are modelled. `None` fields are
//! omitted so Plotly falls back to its own defaults.

use serde::Serialize;

/// Semi-transparent white used for both the paper and the plot area.
pub const CHART_BACKGROUND: &str = "rgba(255,255,255,0.5)";

/// A complete chart: traces plus layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

impl Figure {
    pub fn new(data: Vec<Trace>, layout: Layout) -> Self {
        Self { data, layout }
    }

    /// A figure with no traces. Still carries the background and a
    /// centred (possibly empty) title.
    pub fn empty(title: &str) -> Self {
        Self::new(Vec::new(), Layout::new(title))
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn title(&self) -> &str {
        &self.layout.title.text
    }

    /// Names of the traces in display order.
    pub fn trace_names(&self) -> Vec<Option<&str>> {
        self.data.iter().map(Trace::name).collect()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// One series. Serialized with Plotly's `type` discriminator.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Scatter(ScatterTrace),
    Box(BoxTrace),
    Histogram(HistogramTrace),
    Sunburst(SunburstTrace),
}

impl Trace {
    pub fn name(&self) -> Option<&str> {
        match self {
            Trace::Scatter(t) => t.name.as_deref(),
            Trace::Box(t) => t.name.as_deref(),
            Trace::Histogram(t) => t.name.as_deref(),
            Trace::Sunburst(_) => None,
        }
    }
}

/// Axis data. Plotly accepts numbers, nullable numbers (gaps) or
/// category/date strings in the same slot.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Values {
    Numbers(Vec<f64>),
    Nullable(Vec<Option<f64>>),
    Labels(Vec<String>),
}

impl Values {
    pub fn len(&self) -> usize {
        match self {
            Values::Numbers(v) => v.len(),
            Values::Nullable(v) => v.len(),
            Values::Labels(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Vec<f64>> for Values {
    fn from(v: Vec<f64>) -> Self {
        Values::Numbers(v)
    }
}

impl From<Vec<Option<f64>>> for Values {
    fn from(v: Vec<Option<f64>>) -> Self {
        Values::Nullable(v)
    }
}

impl From<Vec<String>> for Values {
    fn from(v: Vec<String>) -> Self {
        Values::Labels(v)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Lines,
    Markers,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Marker {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
}

impl Marker {
    pub fn colored(color: &str) -> Self {
        Self {
            color: Some(color.to_string()),
            size: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Line {
    pub color: String,
}

impl Line {
    pub fn colored(color: &str) -> Self {
        Self {
            color: color.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterTrace {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub x: Values,
    pub y: Values,
    pub mode: Mode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hovertext: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<Line>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legendgroup: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showlegend: Option<bool>,
}

impl ScatterTrace {
    pub fn new(name: Option<String>, x: Values, y: Values, mode: Mode) -> Self {
        Self {
            name,
            x,
            y,
            mode,
            hovertext: None,
            marker: None,
            line: None,
            opacity: None,
            legendgroup: None,
            showlegend: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxTrace {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub x: Values,
    pub y: Values,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offsetgroup: Option<String>,
}

/// Histogram bin edges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct XBins {
    pub start: f64,
    pub end: f64,
    pub size: f64,
}

impl XBins {
    /// One bin per hour of the day, centred on the hour.
    pub fn hourly() -> Self {
        Self {
            start: -0.5,
            end: 23.5,
            size: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramTrace {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub x: Values,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub histnorm: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xbins: Option<XBins>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legendgroup: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showlegend: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SunburstMarker {
    pub colors: Vec<f64>,
    /// `[position, colour]` stops from 0.0 to 1.0.
    pub colorscale: Vec<(f64, String)>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cmid: Option<f64>,
    pub showscale: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SunburstTrace {
    pub ids: Vec<String>,
    pub labels: Vec<String>,
    pub parents: Vec<String>,
    pub values: Vec<f64>,
    pub branchvalues: String,
    pub marker: SunburstMarker,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hovertemplate: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Font {
    pub size: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub text: String,
    pub x: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisTitle {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub title: AxisTitle,
}

impl Axis {
    pub fn titled(text: impl Into<String>) -> Self {
        Self {
            title: AxisTitle { text: text.into() },
        }
    }
}

/// Figure layout. [`Layout::new`] sets the shared background and centres
/// the title; every figure the dashboard builds starts from it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub title: Title,
    pub paper_bgcolor: String,
    pub plot_bgcolor: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boxmode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barmode: Option<String>,
}

impl Layout {
    pub fn new(title: &str) -> Self {
        Self {
            title: Title {
                text: title.to_string(),
                x: 0.5,
                font: None,
            },
            paper_bgcolor: CHART_BACKGROUND.to_string(),
            plot_bgcolor: CHART_BACKGROUND.to_string(),
            xaxis: None,
            yaxis: None,
            boxmode: None,
            barmode: None,
        }
    }

    pub fn with_axes(mut self, x: impl Into<String>, y: impl Into<String>) -> Self {
        self.xaxis = Some(Axis::titled(x));
        self.yaxis = Some(Axis::titled(y));
        self
    }

    pub fn with_title_size(mut self, size: u32) -> Self {
        self.title.font = Some(Font { size });
        self
    }
}
