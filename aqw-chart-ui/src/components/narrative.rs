//! Narrative paragraph shown beside a chart.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct NarrativeProps {
    pub text: String,
}

#[component]
pub fn Narrative(props: NarrativeProps) -> Element {
    rsx! {
        div {
            style: "flex: 1; padding: 16px; font-size: 15px; line-height: 1.5; text-align: justify; background: rgba(255,255,255,0.5); border-radius: 4px;",
            "{props.text}"
        }
    }
}
