//! Browser implementations of the pipeline collaborators.

use crate::js_bridge;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Element, Response};
use wm_chart_data::options::ChartOptions;
use wm_chart_data::pipeline::{ChartDataSource, ChartSurface, HttpReply};
use wm_chart_data::table::ChartTable;
use wm_chart_data::ChartError;

/// The page's `location.search`, or an empty string outside a browser page.
pub fn location_search() -> String {
    web_sys::window()
        .and_then(|window| window.location().search().ok())
        .unwrap_or_default()
}

fn transport_error(err: JsValue) -> ChartError {
    ChartError::Transport(format!("{:?}", err))
}

/// Issues the GET with the browser `fetch` API.
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchDataSource;

impl ChartDataSource for FetchDataSource {
    async fn get(&self, url: &str) -> Result<HttpReply, ChartError> {
        let window = web_sys::window()
            .ok_or_else(|| ChartError::Transport("no window available".to_string()))?;

        let response = JsFuture::from(window.fetch_with_str(url))
            .await
            .map_err(transport_error)?;
        let response: Response = response.dyn_into().map_err(transport_error)?;
        let status = response.status();

        let text = response.text().map_err(transport_error)?;
        let body = JsFuture::from(text)
            .await
            .map_err(transport_error)?
            .as_string()
            .unwrap_or_default();

        log::debug!("GET {} - status {}, {} bytes", url, status, body.len());
        Ok(HttpReply { status, body })
    }
}

/// The chart container element, looked up by id on every call.
#[derive(Debug, Clone)]
pub struct DomSurface {
    container_id: String,
}

impl DomSurface {
    pub fn new(container_id: impl Into<String>) -> Self {
        Self {
            container_id: container_id.into(),
        }
    }

    fn container(&self) -> Option<Element> {
        web_sys::window()?
            .document()?
            .get_element_by_id(&self.container_id)
    }
}

fn pixels(value: i32) -> Option<u32> {
    u32::try_from(value).ok().filter(|px| *px > 0)
}

impl ChartSurface for DomSurface {
    fn dimensions(&self) -> (Option<u32>, Option<u32>) {
        match self.container() {
            Some(el) => (pixels(el.client_width()), pixels(el.client_height())),
            None => (None, None),
        }
    }

    fn show_message(&mut self, message: &str) {
        match self.container() {
            Some(el) => el.set_text_content(Some(message)),
            None => log::warn!("#{} missing, cannot show: {}", self.container_id, message),
        }
    }

    fn draw(&mut self, table: &ChartTable, options: &ChartOptions) {
        match (serde_json::to_string(table), serde_json::to_string(options)) {
            (Ok(table_json), Ok(options_json)) => {
                js_bridge::render_trend_chart(&self.container_id, &table_json, &options_json);
            }
            (Err(e), _) | (_, Err(e)) => log::error!("failed to serialize chart: {}", e),
        }
    }
}
