//! Start-range links shown with the chart.
//!
//! Each link reloads the page with the `s` (start) parameter replaced and
//! every other parameter kept byte for byte, so the chart is fetched again
//! for the new range on the next page load with the same parameters.

use crate::query::QueryParameters;

/// Parameter holding the range start: `*` for everything, or a negative
/// day offset from today.
pub const START_KEY: &str = "s";

/// Start used by the backend when the page does not pass one.
pub const DEFAULT_START: &str = "-14";

/// A named range and its `s` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewRange {
    pub name: &'static str,
    pub start: &'static str,
}

pub const VIEW_RANGES: [ViewRange; 8] = [
    ViewRange { name: "All", start: "*" },
    ViewRange { name: "1y", start: "-365" },
    ViewRange { name: "6m", start: "-180" },
    ViewRange { name: "3m", start: "-90" },
    ViewRange { name: "2m", start: "-60" },
    ViewRange { name: "1m", start: "-30" },
    ViewRange { name: "2w", start: "-14" },
    ViewRange { name: "1w", start: "-7" },
];

/// A range link ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewRangeLink {
    pub name: &'static str,
    pub href: String,
    pub selected: bool,
}

/// Links for every view range, relative to the page query `search`.
pub fn view_range_links(search: &str) -> Vec<ViewRangeLink> {
    let params = QueryParameters::parse(search);
    let current = params
        .get(START_KEY)
        .filter(|start| !start.is_empty())
        .unwrap_or(DEFAULT_START);

    VIEW_RANGES
        .iter()
        .map(|range| {
            let mut linked = params.clone();
            linked.set(START_KEY, range.start);
            ViewRangeLink {
                name: range.name,
                href: linked.to_page_query(),
                selected: range.start == current,
            }
        })
        .collect()
}
