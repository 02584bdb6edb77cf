//! Failure kinds of the chart pipeline.

use crate::config::ERROR_PREFIX;
use thiserror::Error;

/// Errors that stop the chart from being drawn.
///
/// Malformed dates inside otherwise well-shaped rows are not errors; they
/// become invalid chart dates (see `table::ChartDate`).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChartError {
    /// The backend answered with a status other than 200.
    #[error("Error loading graph: {0}")]
    BadStatus(u16),
    /// The request never produced a response (network error, CORS, ...).
    #[error("request failed: {0}")]
    Transport(String),
    /// The response body is not `{ data: { rows: [[date, low, mid], ...] } }`.
    #[error("invalid chart data: {0}")]
    Decode(String),
}

impl ChartError {
    /// Text written into the chart container in place of the chart.
    ///
    /// `BadStatus` gives exactly `"Error loading graph: <status>"`.
    pub fn display_message(&self) -> String {
        match self {
            ChartError::BadStatus(status) => format!("{ERROR_PREFIX}{status}"),
            ChartError::Transport(_) => format!("{ERROR_PREFIX}request failed"),
            ChartError::Decode(_) => format!("{ERROR_PREFIX}invalid chart data"),
        }
    }
}

impl From<serde_json::Error> for ChartError {
    fn from(err: serde_json::Error) -> Self {
        ChartError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_status_message() {
        let err = ChartError::BadStatus(500);
        assert_eq!(err.display_message(), "Error loading graph: 500");
        assert_eq!(err.to_string(), "Error loading graph: 500");
    }

    #[test]
    fn test_transport_message_hides_details() {
        let err = ChartError::Transport("TypeError: Failed to fetch".to_string());
        assert_eq!(err.display_message(), "Error loading graph: request failed");
        assert!(err.to_string().contains("Failed to fetch"));
    }

    #[test]
    fn test_decode_from_serde() {
        let err: ChartError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, ChartError::Decode(_)));
        assert_eq!(err.display_message(), "Error loading graph: invalid chart data");
    }
}
