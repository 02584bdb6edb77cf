//! Runtime settings shared by the web app and the CLI.

/// Backend path serving chart rows.
pub const DEFAULT_ENDPOINT: &str = "/api/chartdata";

/// DOM id of the element the chart is drawn into.
pub const DEFAULT_CONTAINER_ID: &str = "chart_div";

/// Number of samples requested when the page does not ask for a count.
pub const DEFAULT_SAMPLES: u32 = 200;

/// Prefix of every message written into the container instead of a chart.
pub const ERROR_PREFIX: &str = "Error loading graph: ";

/// Settings for one chart page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartConfig {
    /// Path (or absolute URL) of the chart data endpoint
    pub endpoint: String,
    /// Container element id
    pub container_id: String,
    /// Value inserted for `samples` when the page query lacks it
    pub default_samples: u32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            container_id: DEFAULT_CONTAINER_ID.to_string(),
            default_samples: DEFAULT_SAMPLES,
        }
    }
}

impl ChartConfig {
    /// Use a different endpoint, keeping the other defaults.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Full request target for an already built `?`-prefixed query string.
    pub fn request_url(&self, query: &str) -> String {
        format!("{}{}", self.endpoint, query)
    }
}
