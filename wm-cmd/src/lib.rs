//! Command implementations for the weight trend CLI.
//!
//! Provides subcommands for checking the request a chart page issues and
//! for fetching `/api/chartdata` from a running backend.

use clap::Subcommand;
use wm_chart_data::config::{DEFAULT_ENDPOINT, DEFAULT_SAMPLES};

pub mod fetch;

#[derive(Subcommand)]
pub enum Command {
    /// Print the chart data request path for a page query string
    Url {
        /// Page query string, e.g. "?s=-90"
        #[arg(short = 'q', long, default_value = "")]
        query: String,

        /// Chart data endpoint path
        #[arg(long, default_value = DEFAULT_ENDPOINT)]
        endpoint: String,
    },

    /// Fetch chart data and print the chart table as CSV
    Fetch {
        /// Backend base URL, e.g. "http://localhost:8080"
        #[arg(short = 'b', long)]
        base_url: String,

        /// Page query string, e.g. "?s=-90&samples=50"
        #[arg(short = 'q', long, default_value = "")]
        query: String,

        /// Chart data endpoint path
        #[arg(long, default_value = DEFAULT_ENDPOINT)]
        endpoint: String,
    },
}

/// Request path the chart page issues for `query`.
pub fn request_path(endpoint: &str, query: &str) -> String {
    let query = wm_chart_data::query::build_query_string(query, DEFAULT_SAMPLES);
    format!("{}{}", endpoint, query)
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Url { query, endpoint } => {
            println!("{}", request_path(&endpoint, &query));
            Ok(())
        }
        Command::Fetch {
            base_url,
            query,
            endpoint,
        } => fetch::run_fetch(&base_url, &endpoint, &query).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_path() {
        assert_eq!(
            request_path("/api/chartdata", "?s=-90"),
            "/api/chartdata?s=-90&samples=200"
        );
        assert_eq!(request_path("/api/chartdata", ""), "/api/chartdata?samples=200");
    }
}
