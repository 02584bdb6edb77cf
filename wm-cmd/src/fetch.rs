//! Fetch chart data from a running backend and print the chart table.

use log::info;
use std::io::Write;
use wm_chart_data::pipeline::{fetch_table, ChartDataSource, HttpReply};
use wm_chart_data::table::ChartTable;
use wm_chart_data::{ChartConfig, ChartError};

/// Chart data source backed by `reqwest`.
pub struct ReqwestDataSource {
    client: reqwest::Client,
}

impl ReqwestDataSource {
    pub fn new() -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(60))
            .build()?;
        Ok(Self { client })
    }
}

impl ChartDataSource for ReqwestDataSource {
    async fn get(&self, url: &str) -> Result<HttpReply, ChartError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ChartError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ChartError::Transport(e.to_string()))?;
        Ok(HttpReply { status, body })
    }
}

/// Write the table as `date,trend,interval_high,interval_low` CSV.
///
/// Invalid dates and null values are written as empty fields.
pub fn write_table_csv<W: Write>(table: &ChartTable, writer: W) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["date", "trend", "interval_high", "interval_low"])?;

    let value = |v: Option<f64>| v.map_or(String::new(), |v| v.to_string());
    for row in table.rows() {
        let date = row
            .date
            .naive_date()
            .map_or(String::new(), |d| d.format("%Y-%m-%d").to_string());
        wtr.write_record([
            date,
            value(row.trend),
            value(row.interval_high),
            value(row.interval_low),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// GET `<base_url><endpoint>?<query>` and print the resulting chart table.
///
/// Fails with `Error loading graph: <status>` on a non-200 response.
pub async fn run_fetch(base_url: &str, endpoint: &str, query: &str) -> anyhow::Result<()> {
    let config = ChartConfig::default()
        .with_endpoint(format!("{}{}", base_url.trim_end_matches('/'), endpoint));
    let source = ReqwestDataSource::new()?;

    let table = fetch_table(&config, query, &source).await?;
    info!("Fetched {} chart rows", table.len());

    write_table_csv(&table, std::io::stdout().lock())
}
