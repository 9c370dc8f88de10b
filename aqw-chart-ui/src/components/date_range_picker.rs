//! Date range picker with start and end date inputs.

use crate::state::AppState;
use aqw_core::dates::{format_date, parse_date};
use aqw_core::DateRange;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct DateRangePickerProps {
    /// DOM id prefix for the two inputs
    pub id: String,
    pub range: Option<DateRange>,
    /// Receives `None` while either input is cleared.
    pub on_change: EventHandler<Option<DateRange>>,
}

/// Inclusive date range limited to the dataset's first and last dates.
#[component]
pub fn DateRangePicker(props: DateRangePickerProps) -> Element {
    let state = use_context::<AppState>();
    let mut start = use_signal(|| props.range.map(|r| r.start()));
    let mut end = use_signal(|| props.range.map(|r| r.end()));

    let (min, max) = match (state.date_bounds)() {
        Some(bounds) => (format_date(&bounds.start()), format_date(&bounds.end())),
        None => (String::new(), String::new()),
    };
    let start_value = start().map(|d| format_date(&d)).unwrap_or_default();
    let end_value = end().map(|d| format_date(&d)).unwrap_or_default();

    let on_change = props.on_change;
    let on_start_change = move |evt: Event<FormData>| {
        let date = parse_date(&evt.value()).ok();
        start.set(date);
        on_change.call(DateRange::from_bounds(date, end()));
    };
    let on_end_change = move |evt: Event<FormData>| {
        let date = parse_date(&evt.value()).ok();
        end.set(date);
        on_change.call(DateRange::from_bounds(start(), date));
    };

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 12px; align-items: center;",
            label {
                style: "font-weight: bold;",
                "From: "
                input {
                    id: "{props.id}-start",
                    r#type: "date",
                    min: "{min}",
                    max: "{max}",
                    value: "{start_value}",
                    onchange: on_start_change,
                }
            }
            label {
                style: "font-weight: bold;",
                "To: "
                input {
                    id: "{props.id}-end",
                    r#type: "date",
                    min: "{min}",
                    max: "{max}",
                    value: "{end_value}",
                    onchange: on_end_change,
                }
            }
        }
    }
}
