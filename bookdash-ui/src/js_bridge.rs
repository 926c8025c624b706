//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The D3.js bar chart lives in `assets/js/bar-chart.js`, is embedded at
//! compile time, and is evaluated as globals (no ES modules) exposed via
//! `window.*`. This module provides safe Rust wrappers that serialize data
//! and call those globals, plus the root theme attribute write and the
//! one-time startup CSV fetch.

use bookdash_data::LoadError;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

// Embed the chart JS and the theme stylesheet at compile time
static BAR_CHART_JS: &str = include_str!("../assets/js/bar-chart.js");
static THEME_CSS: &str = include_str!("../assets/css/theme.css");

/// URL for the D3.js library, injected if the host page lacks it.
const D3_CDN_URL: &str = "https://cdn.jsdelivr.net/npm/d3@7";

/// localStorage key for the persisted theme flag.
const THEME_STORAGE_KEY: &str = "bookdash-theme";

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('bookdash JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize chart scripts and page chrome. Call once at app startup.
///
/// Injects the theme stylesheet and, if the host page does not already load
/// D3, a CDN script tag. The chart JS defines its functions via `function`
/// declarations; to make them globally accessible they are evaluated at
/// global scope via indirect eval once D3 is ready, then promoted to
/// `window.*` explicitly.
pub fn init_charts() {
    let store_js = format!(
        "window.__bookdashChartScripts = {}; window.__bookdashThemeCss = {};",
        serde_json::to_string(BAR_CHART_JS).unwrap_or_default(),
        serde_json::to_string(THEME_CSS).unwrap_or_default(),
    );
    let _ = js_sys::eval(&store_js);

    let init_js = format!(
        r#"
        (function() {{
            var style = document.createElement('style');
            style.textContent = window.__bookdashThemeCss;
            document.head.appendChild(style);
            delete window.__bookdashThemeCss;

            if (typeof d3 === 'undefined' && !document.getElementById('bookdash-d3')) {{
                var script = document.createElement('script');
                script.id = 'bookdash-d3';
                script.src = '{D3_CDN_URL}';
                document.head.appendChild(script);
            }}

            var waitForD3 = setInterval(function() {{
                if (typeof d3 !== 'undefined') {{
                    clearInterval(waitForD3);
                    // Eval at global scope via indirect eval
                    (0, eval)(window.__bookdashChartScripts);
                    delete window.__bookdashChartScripts;
                    // Promote the function declaration to window explicitly
                    if (typeof renderBarChart !== 'undefined') window.renderBarChart = renderBarChart;
                    window.__bookdashChartsReady = true;
                }}
            }}, 100);
        }})();
        "#
    );
    let _ = js_sys::eval(&init_js);
    log::debug!("chart scripts scheduled for initialization");
}

/// Render the bar chart from a serialized ChartSpec.
///
/// Uses a polling loop to wait for D3.js to load, chart scripts to
/// initialize, and the container DOM element to exist before rendering.
/// Each call fully replaces the previous chart.
pub fn render_bar_chart(container_id: &str, spec_json: &str) {
    // JSON-encode the payload so titles with quotes survive the eval round trip
    let embedded_spec = serde_json::to_string(spec_json).unwrap_or_default();
    call_js(&format!(
        r#"
        (function() {{
            var spec = {embedded_spec};
            var poll = setInterval(function() {{
                if (window.__bookdashChartsReady &&
                    typeof window.renderBarChart !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.renderBarChart('{container_id}', spec);
                    }} catch(e) {{ console.error('[bookdash] renderBarChart error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Propagate the theme switch to the page chrome and persist it.
///
/// A one-way bridge: sets `data-theme` on the document root (the injected
/// stylesheet keys off it) and stores the choice so it survives reloads.
/// Independent of the chart recompute path.
pub fn apply_theme(dark: bool) {
    let theme = if dark { "dark" } else { "light" };
    call_js(&format!(
        r#"
        document.documentElement.setAttribute('data-theme', '{theme}');
        if (window.localStorage) {{
            window.localStorage.setItem('{THEME_STORAGE_KEY}', '{theme}');
        }}
        "#,
    ));
}

/// Read the persisted theme flag, if any, from a previous visit.
pub fn persisted_dark_mode() -> Option<bool> {
    let value = js_sys::eval(&format!(
        "window.localStorage ? window.localStorage.getItem('{THEME_STORAGE_KEY}') : null"
    ))
    .ok()?;
    match value.as_string()?.as_str() {
        "dark" => Some(true),
        "light" => Some(false),
        _ => None,
    }
}

/// Fetch the books CSV over HTTP. Runs once at startup.
///
/// Every failure mode here is the "source unreachable" kind, so they all
/// surface as [`LoadError::Fetch`] for the caller to treat as fatal.
pub async fn fetch_csv(url: &str) -> Result<String, LoadError> {
    let fetch_err = |detail: String| LoadError::Fetch(detail);

    let window = web_sys::window().ok_or_else(|| fetch_err("no window object".into()))?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|e| fetch_err(format!("failed to build request: {:?}", e)))?;

    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| fetch_err(format!("fetch failed: {:?}", e)))?;
    let resp: Response = resp_value
        .dyn_into()
        .map_err(|_| fetch_err("fetch returned a non-Response value".into()))?;

    if !resp.ok() {
        return Err(fetch_err(format!("HTTP {} fetching {}", resp.status(), url)));
    }

    let text_promise = resp
        .text()
        .map_err(|e| fetch_err(format!("failed to read response body: {:?}", e)))?;
    let text = JsFuture::from(text_promise)
        .await
        .map_err(|e| fetch_err(format!("failed to read response body: {:?}", e)))?;
    text.as_string()
        .ok_or_else(|| fetch_err("response body was not text".into()))
}
