//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! Plotly.js is pulled from its CDN on first use and the helpers in
//! `assets/js/plotly-bridge.js` are evaluated as globals (no ES modules) and
//! exposed via `window.*`. Figures arrive fully described by
//! [`aqw_charts::Figure`]; this side only hands their JSON to Plotly.

use aqw_charts::Figure;
use dioxus::document::{self, Eval};
use wasm_bindgen::JsValue;

static PLOTLY_BRIDGE_JS: &str = include_str!("../assets/js/plotly-bridge.js");

/// Pinned Plotly build.
pub const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.27.0.min.js";

/// Plotly event forwarded by [`listen_for`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartEvent {
    Hover,
    Click,
}

impl ChartEvent {
    fn plotly_name(&self) -> &'static str {
        match self {
            ChartEvent::Hover => "plotly_hover",
            ChartEvent::Click => "plotly_click",
        }
    }
}

fn describe(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('AQW JS call failed:', e); }}",
        code
    );
    if let Err(e) = js_sys::eval(&wrapped) {
        log::warn!("[AQW] eval failed: {}", describe(e));
    }
}

/// Inject Plotly and the bridge helpers. Safe to call repeatedly.
///
/// The helpers are declared with `function`, so they are stored on window
/// and evaluated at global scope once Plotly is ready, then promoted to
/// `window.*` explicitly.
pub fn init_charts() {
    let store_js = format!(
        "if (!window.__aqwBridgeScript && !window.__aqwChartsReady) {{ window.__aqwBridgeScript = {}; }}",
        serde_json::to_string(PLOTLY_BRIDGE_JS).unwrap_or_default()
    );
    call_js(&store_js);

    let init_js = format!(
        r#"
        (function() {{
            if (window.__aqwChartsReady || window.__aqwChartsLoading) return;
            window.__aqwChartsLoading = true;
            if (typeof Plotly === 'undefined') {{
                var s = document.createElement('script');
                s.src = '{cdn}';
                s.async = true;
                document.head.appendChild(s);
            }}
            var waitForPlotly = setInterval(function() {{
                if (typeof Plotly !== 'undefined') {{
                    clearInterval(waitForPlotly);
                    (0, eval)(window.__aqwBridgeScript);
                    delete window.__aqwBridgeScript;
                    if (typeof aqwRenderFigure !== 'undefined') window.aqwRenderFigure = aqwRenderFigure;
                    if (typeof aqwDestroyFigure !== 'undefined') window.aqwDestroyFigure = aqwDestroyFigure;
                    if (typeof aqwChartTarget !== 'undefined') window.aqwChartTarget = aqwChartTarget;
                    window.__aqwChartsReady = true;
                    console.log('AQW charts initialized');
                }}
            }}, 100);
        }})();
        "#,
        cdn = PLOTLY_CDN
    );
    call_js(&init_js);
}

/// Render `figure` into the element with id `container_id`.
///
/// Uses a polling loop to wait for Plotly, the bridge helpers and the
/// container DOM element before rendering. Re-rendering the same container
/// updates it in place, keeping event listeners attached.
pub fn render_figure(container_id: &str, figure: &Figure) {
    let figure_json = match figure.to_json() {
        Ok(json) => json,
        Err(e) => {
            log::error!("[AQW] could not serialize figure for {}: {}", container_id, e);
            return;
        }
    };
    // JSON string literal of the JSON document: safe to splice into JS.
    let literal = serde_json::to_string(&figure_json).unwrap_or_default();
    log::debug!(
        "[AQW Debug] render_figure {} with {} traces",
        container_id,
        figure.data.len()
    );
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__aqwChartsReady &&
                    typeof window.aqwRenderFigure !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.aqwRenderFigure('{container_id}', {literal});
                    }} catch(e) {{ console.error('[AQW] aqwRenderFigure error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Destroy/clean up a chart in the given container.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "if (window.aqwDestroyFigure) window.aqwDestroyFigure('{}');",
        container_id
    ));
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(container_id));
    if let Some(el) = element {
        el.set_inner_html("");
    }
}

/// Start forwarding `event` from the chart in `container_id`.
///
/// Each event sends `{name, curveNumber}` of its first point through the
/// returned [`Eval`]; receive them as [`aqw_charts::ChartTarget`]. The
/// listener attaches once the container has been rendered by Plotly.
pub fn listen_for(container_id: &str, event: ChartEvent) -> Eval {
    let flag = format!("__aqw_{}", event.plotly_name());
    document::eval(&format!(
        r#"
        var poll = setInterval(function() {{
            var el = document.getElementById('{container_id}');
            if (window.__aqwChartsReady && el && typeof el.on === 'function') {{
                clearInterval(poll);
                if (el['{flag}']) return;
                el['{flag}'] = true;
                el.on('{event}', function(data) {{
                    var target = window.aqwChartTarget(data);
                    if (target) dioxus.send(target);
                }});
            }}
        }}, 200);
        "#,
        event = event.plotly_name(),
    ))
}
