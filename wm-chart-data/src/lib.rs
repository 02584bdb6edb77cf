//! Platform-independent core of the weight trend chart.
//!
//! This crate provides:
//! - `query`: page query parameters and the encoded request query string
//! - `rows`: the `/api/chartdata` payload and its fixed-shape rows
//! - `table`: conversion of rows into the date-keyed chart table
//! - `options`: the fixed line chart options record
//! - `pipeline`: fetch, check, transform and draw over injected collaborators
//! - `view_range`: the start-range links shown under the chart

pub mod config;
pub mod error;
pub mod options;
pub mod pipeline;
pub mod query;
pub mod rows;
pub mod table;
pub mod view_range;

pub use config::ChartConfig;
pub use error::ChartError;
