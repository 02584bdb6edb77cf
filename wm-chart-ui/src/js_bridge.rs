//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The Google Charts drawing code lives in `assets/js/trend-chart.js` and is
//! loaded at runtime once the Google Charts loader has brought in the
//! `corechart` package. Functions are evaluated as globals and exposed via
//! `window.*`. This module serializes data and calls those globals.

// Embed the chart JS at compile time
static TREND_CHART_JS: &str = include_str!("../assets/js/trend-chart.js");

/// Google Charts loader, injected when the host page does not include it.
const LOADER_URL: &str = "https://www.gstatic.com/charts/loader.js";

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('WM JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Quote a Rust string as a JS string literal.
fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

/// Initialize the chart script once Google Charts is available.
///
/// Injects the loader script if needed, loads the `corechart` package, then
/// evaluates the chart JS at global scope and promotes its functions to
/// `window.*`. Sets `window.__wmChartsReady` when done. Safe to call more
/// than once.
pub fn init_charts() {
    let store_js = format!("window.__wmChartScripts = {};", js_string(TREND_CHART_JS));
    let _ = js_sys::eval(&store_js);

    let init_js = format!(
        r#"
        (function() {{
            if (window.__wmChartsInit) return;
            window.__wmChartsInit = true;
            if (typeof google === 'undefined' || !google.charts) {{
                var loader = document.createElement('script');
                loader.src = {loader};
                document.head.appendChild(loader);
            }}
            var waitForLoader = setInterval(function() {{
                if (typeof google !== 'undefined' && google.charts) {{
                    clearInterval(waitForLoader);
                    google.charts.load('current', {{packages: ['corechart']}});
                    google.charts.setOnLoadCallback(function() {{
                        // Eval at global scope via indirect eval
                        (0, eval)(window.__wmChartScripts);
                        delete window.__wmChartScripts;
                        if (typeof renderTrendChart !== 'undefined') window.renderTrendChart = renderTrendChart;
                        window.__wmChartsReady = true;
                        console.log('WM charts initialized');
                    }});
                }}
            }}, 100);
        }})();
        "#,
        loader = js_string(LOADER_URL),
    );
    let _ = js_sys::eval(&init_js);
}

/// JS that waits for the chart code and the container, then draws.
fn trend_chart_script(container_id: &str, table_json: &str, options_json: &str) -> String {
    let id = js_string(container_id);
    let table = js_string(table_json);
    let options = js_string(options_json);
    format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__wmChartsReady &&
                    typeof window.renderTrendChart !== 'undefined' &&
                    document.getElementById({id})) {{
                    clearInterval(poll);
                    try {{
                        window.renderTrendChart({id}, {table}, {options});
                    }} catch(e) {{ console.error('[WM] renderTrendChart error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    )
}

/// Draw the trend line chart into `container_id`.
///
/// `table_json` is a serialized `ChartTable`, `options_json` serialized
/// `ChartOptions`. Uses a polling loop to wait for Google Charts, the chart
/// script and the container DOM element before drawing.
pub fn render_trend_chart(container_id: &str, table_json: &str, options_json: &str) {
    call_js(&trend_chart_script(container_id, table_json, options_json));
}
