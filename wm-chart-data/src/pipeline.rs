//! Request, check, transform and draw.
//!
//! The pipeline runs once per page load. Its two collaborators are passed in
//! explicitly: a `ChartDataSource` that performs the GET and a `ChartSurface`
//! that owns the container. The browser implementations live in
//! `wm-chart-ui`; the CLI supplies a `reqwest` source.

use crate::config::ChartConfig;
use crate::error::ChartError;
use crate::options::ChartOptions;
use crate::query::build_query_string;
use crate::rows::parse_rows;
use crate::table::{build_chart_table, ChartTable};

/// Status and body of a completed HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

/// Performs the chart data GET.
///
/// Implementations return `ChartError::Transport` when no response arrives.
/// Any response, whatever its status, is an `Ok(HttpReply)`.
#[allow(async_fn_in_trait)]
pub trait ChartDataSource {
    async fn get(&self, url: &str) -> Result<HttpReply, ChartError>;
}

/// The display container.
pub trait ChartSurface {
    /// Current pixel width and height, when known.
    fn dimensions(&self) -> (Option<u32>, Option<u32>);

    /// Replace the container content with plain text.
    fn show_message(&mut self, message: &str);

    /// Draw the line chart into the container.
    fn draw(&mut self, table: &ChartTable, options: &ChartOptions);
}

/// Fetch rows for the page query `search` and build the chart table.
pub async fn fetch_table<D: ChartDataSource>(
    config: &ChartConfig,
    search: &str,
    source: &D,
) -> Result<ChartTable, ChartError> {
    let url = config.request_url(&build_query_string(search, config.default_samples));
    log::info!("GET {}", url);

    let reply = source.get(&url).await?;
    if reply.status != 200 {
        return Err(ChartError::BadStatus(reply.status));
    }

    let rows = parse_rows(&reply.body)?;
    log::debug!("received {} chart rows", rows.len());
    Ok(build_chart_table(&rows))
}

/// Fetch the chart data and draw it, or put an error message in the
/// container.
///
/// On success the drawn table is returned. On failure the container holds
/// `ChartError::display_message` and nothing is drawn.
pub async fn fetch_and_render<D: ChartDataSource, S: ChartSurface>(
    config: &ChartConfig,
    search: &str,
    source: &D,
    surface: &mut S,
) -> Result<ChartTable, ChartError> {
    match fetch_table(config, search, source).await {
        Ok(table) => {
            let (width, height) = surface.dimensions();
            let options = ChartOptions::trend(width, height);
            surface.draw(&table, &options);
            log::info!("drew trend chart with {} rows", table.len());
            Ok(table)
        }
        Err(err) => {
            log::error!("chart not drawn: {}", err);
            surface.show_message(&err.display_message());
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::ChartDate;
    use chrono::NaiveDate;
    use std::cell::RefCell;

    struct FixedSource {
        reply: Result<HttpReply, ChartError>,
        requested: RefCell<Vec<String>>,
    }

    impl FixedSource {
        fn ok(status: u16, body: &str) -> Self {
            Self {
                reply: Ok(HttpReply {
                    status,
                    body: body.to_string(),
                }),
                requested: RefCell::new(Vec::new()),
            }
        }

        fn unreachable() -> Self {
            Self {
                reply: Err(ChartError::Transport("connection refused".to_string())),
                requested: RefCell::new(Vec::new()),
            }
        }
    }

    impl ChartDataSource for FixedSource {
        async fn get(&self, url: &str) -> Result<HttpReply, ChartError> {
            self.requested.borrow_mut().push(url.to_string());
            self.reply.clone()
        }
    }

    #[derive(Default)]
    struct RecordingSurface {
        messages: Vec<String>,
        draws: Vec<(ChartTable, ChartOptions)>,
    }

    impl ChartSurface for RecordingSurface {
        fn dimensions(&self) -> (Option<u32>, Option<u32>) {
            (Some(800), Some(400))
        }

        fn show_message(&mut self, message: &str) {
            self.messages.push(message.to_string());
        }

        fn draw(&mut self, table: &ChartTable, options: &ChartOptions) {
            self.draws.push((table.clone(), options.clone()));
        }
    }

    const ONE_ROW: &str = r#"{"data": {"rows": [["2021-03-05", 10, 15]]}}"#;

    #[tokio::test]
    async fn test_requests_endpoint_with_default_samples() {
        let source = FixedSource::ok(200, ONE_ROW);
        let mut surface = RecordingSurface::default();
        fetch_and_render(&ChartConfig::default(), "?s=-30", &source, &mut surface)
            .await
            .unwrap();
        assert_eq!(
            *source.requested.borrow(),
            vec!["/api/chartdata?s=-30&samples=200".to_string()]
        );
    }

    #[tokio::test]
    async fn test_success_draws_table_sized_to_container() {
        let source = FixedSource::ok(200, ONE_ROW);
        let mut surface = RecordingSurface::default();
        let table = fetch_and_render(&ChartConfig::default(), "", &source, &mut surface)
            .await
            .unwrap();

        assert!(surface.messages.is_empty());
        assert_eq!(surface.draws.len(), 1);
        let (drawn, options) = &surface.draws[0];
        assert_eq!(drawn, &table);
        assert_eq!(options.width, Some(800));
        assert_eq!(options.height, Some(400));

        let row = drawn.rows()[0];
        assert_eq!(
            row.date,
            ChartDate::Valid(NaiveDate::from_ymd_opt(2021, 3, 5).unwrap())
        );
        assert_eq!(
            [row.trend, row.interval_high, row.interval_low],
            [Some(15.0), Some(15.0), Some(10.0)]
        );
    }

    #[tokio::test]
    async fn test_bad_status_writes_message_without_drawing() {
        let source = FixedSource::ok(500, "Internal Server Error");
        let mut surface = RecordingSurface::default();
        let result = fetch_and_render(&ChartConfig::default(), "", &source, &mut surface).await;

        assert_eq!(result, Err(ChartError::BadStatus(500)));
        assert_eq!(surface.messages, vec!["Error loading graph: 500".to_string()]);
        assert!(surface.draws.is_empty());
    }

    #[tokio::test]
    async fn test_empty_rows_still_draw() {
        let source = FixedSource::ok(200, r#"{"data": {"rows": []}}"#);
        let mut surface = RecordingSurface::default();
        let table = fetch_and_render(&ChartConfig::default(), "", &source, &mut surface)
            .await
            .unwrap();

        assert!(table.is_empty());
        assert_eq!(surface.draws.len(), 1);
        assert!(surface.messages.is_empty());
    }

    #[tokio::test]
    async fn test_transport_failure_is_reported_in_container() {
        let source = FixedSource::unreachable();
        let mut surface = RecordingSurface::default();
        let result = fetch_and_render(&ChartConfig::default(), "", &source, &mut surface).await;

        assert!(matches!(result, Err(ChartError::Transport(_))));
        assert_eq!(
            surface.messages,
            vec!["Error loading graph: request failed".to_string()]
        );
        assert!(surface.draws.is_empty());
    }

    #[tokio::test]
    async fn test_malformed_body_is_reported_in_container() {
        let source = FixedSource::ok(200, r#"{"data": {"rows": [["2021-03-05"]]}}"#);
        let mut surface = RecordingSurface::default();
        let result = fetch_and_render(&ChartConfig::default(), "", &source, &mut surface).await;

        assert!(matches!(result, Err(ChartError::Decode(_))));
        assert_eq!(
            surface.messages,
            vec!["Error loading graph: invalid chart data".to_string()]
        );
        assert!(surface.draws.is_empty());
    }

    #[tokio::test]
    async fn test_repeated_runs_produce_same_table() {
        let body = r#"{"data": {"rows": [["2021-03-05", 10, 15], ["2021-03-06", 9.5, 14.6]]}}"#;
        let source = FixedSource::ok(200, body);
        let mut surface = RecordingSurface::default();
        let config = ChartConfig::default();

        let first = fetch_and_render(&config, "", &source, &mut surface).await.unwrap();
        let second = fetch_and_render(&config, "", &source, &mut surface).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(second.len(), 2);
        assert_eq!(surface.draws[0].0, surface.draws[1].0);
    }
}
