//! Tab strip switching between the four dashboard views.

use crate::state::{AppState, Tab};
use dioxus::prelude::*;

const ACTIVE_STYLE: &str =
    "flex: 1; padding: 10px; border: none; background: #1565C0; color: white; font-weight: bold; cursor: pointer;";
const INACTIVE_STYLE: &str =
    "flex: 1; padding: 10px; border: none; background: #E3F2FD; color: #1565C0; cursor: pointer;";

#[component]
pub fn TabBar() -> Element {
    let mut state = use_context::<AppState>();
    let active = (state.active_tab)();
    let tabs: Vec<(Tab, &'static str, &'static str)> = Tab::ALL
        .iter()
        .map(|&tab| {
            let style = if tab == active { ACTIVE_STYLE } else { INACTIVE_STYLE };
            (tab, tab.label(), style)
        })
        .collect();

    rsx! {
        div {
            style: "display: flex; border-bottom: 2px solid #1565C0; margin-bottom: 16px;",
            for (tab, label, style) in tabs {
                button {
                    key: "{label}",
                    style: "{style}",
                    onclick: move |_| state.active_tab.set(tab),
                    "{label}"
                }
            }
        }
    }
}
