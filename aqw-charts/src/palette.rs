//! Colours shared by every chart.

/// Plotly's default qualitative sequence, cycled across series.
pub const QUALITATIVE: [&str; 10] = [
    "#636efa", "#EF553B", "#00cc96", "#ab63fa", "#FFA15A", "#19d3f3", "#FF6692", "#B6E880",
    "#FF97FF", "#FECB52",
];

/// The cmocean "deep" sequential scale, light to dark.
pub const DEEP: [&str; 12] = [
    "rgb(253, 253, 204)",
    "rgb(206, 236, 179)",
    "rgb(156, 219, 165)",
    "rgb(111, 201, 163)",
    "rgb(86, 177, 163)",
    "rgb(76, 153, 160)",
    "rgb(68, 130, 155)",
    "rgb(62, 108, 150)",
    "rgb(62, 82, 143)",
    "rgb(64, 60, 115)",
    "rgb(54, 43, 77)",
    "rgb(39, 26, 44)",
];

/// Fill colour of per-pollutant histograms.
pub const HISTOGRAM_COLOR: &str = "turquoise";

/// Colour of the `index`-th series.
pub fn series_color(index: usize) -> &'static str {
    QUALITATIVE[index % QUALITATIVE.len()]
}

/// `colors` spread evenly over `[0, 1]` as Plotly colorscale stops.
pub fn colorscale(colors: &[&str]) -> Vec<(f64, String)> {
    match colors.len() {
        0 => Vec::new(),
        1 => vec![(0.0, colors[0].to_string()), (1.0, colors[0].to_string())],
        n => colors
            .iter()
            .enumerate()
            .map(|(i, c)| (i as f64 / (n - 1) as f64, c.to_string()))
            .collect(),
    }
}
