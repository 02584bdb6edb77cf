//! Reusable Dioxus RSX components for the weight trend chart.

mod chart_container;
mod view_range_links;

pub use chart_container::ChartContainer;
pub use view_range_links::ViewRangeLinks;
