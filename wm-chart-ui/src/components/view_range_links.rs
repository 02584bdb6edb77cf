//! Links that reload the page with a different start range.

use dioxus::prelude::*;
use wm_chart_data::view_range::view_range_links;

#[derive(Props, Clone, PartialEq)]
pub struct ViewRangeLinksProps {
    /// The page's `location.search`
    pub search: String,
}

/// Row of range links (All, 1y, 6m, ...); the active range is shown bold
/// and is not a link.
#[component]
pub fn ViewRangeLinks(props: ViewRangeLinksProps) -> Element {
    let links = view_range_links(&props.search);

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 10px; justify-content: center; font-size: 13px;",
            span { style: "color: #666;", "View: " }
            for link in links.into_iter() {
                if link.selected {
                    strong { key: "{link.name}", "{link.name}" }
                } else {
                    a { key: "{link.name}", href: "{link.href}", "{link.name}" }
                }
            }
        }
    }
}
