//! Chart container component.

use dioxus::prelude::*;

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id for the chart container (Plotly will render into this)
    pub id: String,
    /// Optional minimum height in pixels
    #[props(default = 450)]
    pub min_height: u32,
    /// Fraction of the row this chart takes, e.g. 50 for side-by-side charts
    #[props(default = 100)]
    pub width_percent: u32,
}

/// A container div for Plotly charts.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!(
        "min-height: {}px; position: relative; width: {}%; box-sizing: border-box;",
        props.min_height, props.width_percent
    );

    rsx! {
        div {
            style: "{style}",
            div {
                id: "{props.id}",
                style: "width: 100%; min-height: {props.min_height}px;",
            }
        }
    }
}
