//! Tab header with a heading, introductory copy and an optional reference link.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    /// Tab heading
    pub title: String,
    /// Introductory paragraph
    #[props(default = String::new())]
    pub intro: String,
    /// `(text, href)` of a reference link shown under the intro
    #[props(default = None)]
    pub link: Option<(String, String)>,
}

#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    rsx! {
        div {
            style: "margin-bottom: 16px;",
            h2 {
                style: "margin: 0 0 12px 0; font-size: 32px; color: #1565C0; text-align: center;",
                "{props.title}"
            }
            if !props.intro.is_empty() {
                p {
                    style: "margin: 0 24px 8px 24px; font-size: 15px; text-align: justify; color: #333;",
                    "{props.intro}"
                }
            }
            if let Some((text, href)) = props.link.as_ref() {
                a {
                    style: "margin: 0 24px; font-size: 15px;",
                    href: "{href}",
                    target: "_blank",
                    rel: "noopener",
                    "{text}"
                }
            }
        }
    }
}
