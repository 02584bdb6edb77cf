//! Fixed display options for the trend line chart.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub title: String,
    pub line_width: f64,
    pub chart_area: ChartArea,
    pub h_axis: Axis,
    pub v_axis: Axis,
    /// Container width in pixels; left to the chart when unknown
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    pub intervals: Intervals,
    pub legend: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartArea {
    pub left: String,
    pub width: String,
    pub top: String,
    pub height: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Axis {
    pub gridlines: Gridlines,
    pub text_style: TextStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Gridlines {
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    pub font_size: u32,
}

/// Interval band drawn as thin bars between the two interval columns.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Intervals {
    pub style: String,
    pub bar_width: f64,
    pub line_width: f64,
    pub point_size: f64,
    pub fill_opacity: f64,
    pub color: String,
}

impl Axis {
    fn with_font_size(font_size: u32) -> Self {
        Self {
            gridlines: Gridlines {
                color: "#eee".to_string(),
            },
            text_style: TextStyle { font_size },
        }
    }
}

impl ChartOptions {
    /// Trend chart options sized to a container of `width` x `height` pixels.
    pub fn trend(width: Option<u32>, height: Option<u32>) -> Self {
        Self {
            title: String::new(),
            line_width: 1.0,
            chart_area: ChartArea {
                left: "15%".to_string(),
                width: "80%".to_string(),
                top: "5%".to_string(),
                height: "75%".to_string(),
            },
            h_axis: Axis::with_font_size(10),
            v_axis: Axis::with_font_size(11),
            width,
            height,
            intervals: Intervals {
                style: "bars".to_string(),
                bar_width: 0.0,
                line_width: 0.7,
                point_size: 1.5,
                fill_opacity: 0.3,
                color: "grey".to_string(),
            },
            legend: "none".to_string(),
        }
    }
}
