//! The `/api/chartdata` payload.
//!
//! ```json
//! { "data": { "rows": [["2021-03-05", 180.4, 181.2], ...] } }
//! ```
//!
//! Every row is `[date, low, mid]`: `low` is the raw entry that bounds the
//! interval band, `mid` the smoothed trend value. Either value is `null` on
//! days without an entry.

use crate::error::ChartError;
use serde::Deserialize;

/// Top-level response body.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChartDataResponse {
    pub data: ChartData,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChartData {
    pub rows: Vec<DataRow>,
}

/// One positional `[date, low, mid]` row.
///
/// Deserializes from a JSON array of exactly three elements.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DataRow {
    /// Digit-delimited date text, e.g. `2021-03-05`
    pub date: String,
    /// Position 1: interval (raw) value
    pub low: Option<f64>,
    /// Position 2: plotted trend value
    pub mid: Option<f64>,
}

impl DataRow {
    pub fn new(date: impl Into<String>, low: Option<f64>, mid: Option<f64>) -> Self {
        Self {
            date: date.into(),
            low,
            mid,
        }
    }
}

/// Decode a response body into its rows.
pub fn parse_rows(body: &str) -> Result<Vec<DataRow>, ChartError> {
    let response: ChartDataResponse = serde_json::from_str(body)?;
    Ok(response.data.rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_positional_rows() {
        let body = r#"{"data": {"rows": [["2021-03-05", 10, 15], ["2021-03-06", 10.5, 14.75]]}}"#;
        let rows = parse_rows(body).unwrap();
        assert_eq!(
            rows,
            vec![
                DataRow::new("2021-03-05", Some(10.0), Some(15.0)),
                DataRow::new("2021-03-06", Some(10.5), Some(14.75)),
            ]
        );
    }

    #[test]
    fn test_parse_null_values() {
        let body = r#"{"data": {"rows": [["2021-03-07", null, 14.7]]}}"#;
        let rows = parse_rows(body).unwrap();
        assert_eq!(rows[0].low, None);
        assert_eq!(rows[0].mid, Some(14.7));
    }

    #[test]
    fn test_parse_empty_rows() {
        assert!(parse_rows(r#"{"data": {"rows": []}}"#).unwrap().is_empty());
    }

    #[test]
    fn test_row_shape_is_validated() {
        let short = r#"{"data": {"rows": [["2021-03-05", 10]]}}"#;
        assert!(matches!(parse_rows(short), Err(ChartError::Decode(_))));

        let long = r#"{"data": {"rows": [["2021-03-05", 10, 15, 20]]}}"#;
        assert!(matches!(parse_rows(long), Err(ChartError::Decode(_))));

        let not_a_number = r#"{"data": {"rows": [["2021-03-05", "ten", 15]]}}"#;
        assert!(matches!(parse_rows(not_a_number), Err(ChartError::Decode(_))));
    }

    #[test]
    fn test_missing_envelope() {
        assert!(matches!(parse_rows(r#"{"rows": []}"#), Err(ChartError::Decode(_))));
        assert!(matches!(parse_rows("<html>"), Err(ChartError::Decode(_))));
    }
}
