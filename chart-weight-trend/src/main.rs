//! Weight trend chart
//!
//! Draws the smoothed weight trend with raw entries as interval bars, using
//! Google Charts.
//!
//! Data flow:
//! 1. On mount: read `location.search` and start loading Google Charts.
//! 2. GET `/api/chartdata` with the page's parameters passed through
//!    (plus `samples=200` unless the page sets it).
//! 3. Non-200: the container shows `Error loading graph: <status>`.
//! 4. Otherwise: `[date, low, mid]` rows become `[date, mid, mid, low]`
//!    and the chart is drawn once at the container's current size.

use dioxus::prelude::*;
use wm_chart_data::{pipeline, ChartConfig};
use wm_chart_ui::browser::{self, DomSurface, FetchDataSource};
use wm_chart_ui::components::{ChartContainer, ViewRangeLinks};
use wm_chart_ui::js_bridge;
use wm_chart_ui::state::AppState;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("weight-trend-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);
    let config = use_hook(ChartConfig::default);
    // The query string is fixed for the life of the page.
    let search = use_hook(browser::location_search);

    // ─── Effect: fetch and draw once on mount ───
    let effect_config = config.clone();
    let effect_search = search.clone();
    use_effect(move || {
        js_bridge::init_charts();

        let config = effect_config.clone();
        let search = effect_search.clone();
        spawn(async move {
            let mut surface = DomSurface::new(config.container_id.clone());
            // On failure the container already holds the error message.
            if let Ok(table) =
                pipeline::fetch_and_render(&config, &search, &FetchDataSource, &mut surface).await
            {
                state.row_count.set(Some(table.len()));
            }
            state.loading.set(false);
        });
    });

    // ─── Render ───
    rsx! {
        div {
            style: "max-width: 900px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            ChartContainer {
                id: config.container_id.clone(),
                loading: *state.loading.read(),
            }

            if let Some(count) = *state.row_count.read() {
                p {
                    style: "font-size: 11px; color: #888; text-align: center; margin-top: 4px;",
                    "{count} points. Line: trend. Bars: distance to the day's weight."
                }
            }

            ViewRangeLinks { search: search.clone() }
        }
    }
}
