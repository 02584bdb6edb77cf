//! Container the trend chart is drawn into.

use dioxus::prelude::*;

/// Width over height of the drawing area. The chart area leaves 20% of the
/// height for date labels, so a wide box keeps the plotted band readable.
const DEFAULT_ASPECT_RATIO: f64 = 2.0;

/// Below this height the date labels crowd out the plot.
const DEFAULT_MIN_HEIGHT: u32 = 240;

#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// DOM id the chart (or the error message) is written into
    pub id: String,
    /// Show the loading note over the empty drawing area
    #[props(default = false)]
    pub loading: bool,
    #[props(default = DEFAULT_ASPECT_RATIO)]
    pub aspect_ratio: f64,
    #[props(default = DEFAULT_MIN_HEIGHT)]
    pub min_height: u32,
}

/// Inline style giving the drawing area a definite client size: full page
/// width, height from the aspect ratio.
fn drawing_area_style(aspect_ratio: f64, min_height: u32) -> String {
    let ratio = if aspect_ratio.is_finite() && aspect_ratio > 0.0 {
        aspect_ratio
    } else {
        DEFAULT_ASPECT_RATIO
    };
    format!("width: 100%; aspect-ratio: {ratio}; min-height: {min_height}px;")
}

/// Drawing area for the trend chart.
///
/// Dioxus leaves the inner div empty; its client size is read when the chart
/// is drawn, and the chart or an error message is written into it directly.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = drawing_area_style(props.aspect_ratio, props.min_height);

    rsx! {
        div {
            style: "position: relative;",
            if props.loading {
                div {
                    style: "position: absolute; top: 50%; left: 50%; transform: translate(-50%, -50%); color: #666;",
                    "Loading weight trend..."
                }
            }
            div {
                id: "{props.id}",
                style: "{style}",
            }
        }
    }
}
