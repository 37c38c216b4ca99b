// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The dashboard page layout.
//!
//! Three selectors share one row; the three chart panels are stacked below
//! them. The charts themselves are drawn client-side by Plotly.js from the
//! figures the server sends.

use maud::{DOCTYPE, Markup, PreEscaped, html};
use tourism_dash_api::SelectorInfo;

const PAGE_TITLE: &str = "Tourism Insights in India Dashboard";
const PLOTLY_SRC: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";
const DASHBOARD_SCRIPT: &str = include_str!("../static/dashboard.js");

/// Chart panel element IDs, top to bottom.
pub const CHART_PANELS: [&str; 3] = ["revenue-growth", "tourist-arrival", "tourism-category-pie"];

const STYLE: &str = "\
body { font-family: Arial, sans-serif; margin: 0 2rem; }\
h1 { text-align: center; margin-bottom: 40px; }\
.row { display: flex; gap: 1rem; margin: 20px 0; }\
.four.columns { flex: 1; display: flex; flex-direction: column; }\
.four.columns select { width: 100%; padding: 0.4rem; }\
.chart { height: 400px; }\
.error { color: #b00020; }";

/// Renders the full dashboard page.
///
/// # Arguments
///
/// * `selectors` - The three selectors, in layout order
pub fn dashboard_page(selectors: &[SelectorInfo]) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (PAGE_TITLE) }
                style { (PreEscaped(STYLE)) }
                script src=(PLOTLY_SRC) charset="utf-8" {}
            }
            body {
                h1 { (PAGE_TITLE) }
                @if selectors.iter().all(|s| s.options.is_empty()) {
                    p class="error" { "No tourism data is loaded." }
                }
                div class="row" {
                    @for selector in selectors {
                        (selector_view(selector))
                    }
                }
                p id="dashboard-error" class="error" hidden {}
                div {
                    @for id in CHART_PANELS {
                        div id=(id) class="chart" {}
                    }
                }
                script { (PreEscaped(DASHBOARD_SCRIPT)) }
            }
        }
    }
}

fn selector_view(selector: &SelectorInfo) -> Markup {
    let id: String = format!("{}-dropdown", selector.dimension);
    html! {
        div class="four columns" {
            label for=(id) { (selector.label) }
            select id=(id) name=(selector.dimension.as_str()) data-dimension=(selector.dimension.as_str()) {
                @for option in &selector.options {
                    option value=(option) selected[selector.selected.as_deref() == Some(option.as_str())] {
                        (option)
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tourism_dash_domain::Dimension;

    fn create_test_selectors() -> Vec<SelectorInfo> {
        vec![
            SelectorInfo {
                dimension: Dimension::Year,
                label: String::from("Year"),
                options: vec![String::from("2022"), String::from("2023")],
                selected: Some(String::from("2022")),
            },
            SelectorInfo {
                dimension: Dimension::Region,
                label: String::from("State/UT"),
                options: vec![String::from("Goa"), String::from("Kerala")],
                selected: Some(String::from("Goa")),
            },
            SelectorInfo {
                dimension: Dimension::Purpose,
                label: String::from("Purpose of Visit"),
                options: vec![String::from("Leisure")],
                selected: Some(String::from("Leisure")),
            },
        ]
    }

    #[test]
    fn test_page_has_three_selectors_and_three_panels() {
        let page: String = dashboard_page(&create_test_selectors()).into_string();

        assert!(page.contains("Tourism Insights in India Dashboard"));
        assert!(page.contains(r#"id="year-dropdown""#));
        assert!(page.contains(r#"id="region-dropdown""#));
        assert!(page.contains(r#"id="purpose-dropdown""#));
        for id in CHART_PANELS {
            assert!(page.contains(&format!(r#"id="{id}""#)));
        }
        assert!(!page.contains("No tourism data is loaded."));
    }

    #[test]
    fn test_default_option_is_preselected() {
        let page: String = dashboard_page(&create_test_selectors()).into_string();

        assert!(page.contains(r#"<option value="2022" selected>2022</option>"#));
        assert!(page.contains(r#"<option value="2023">2023</option>"#));
    }

    #[test]
    fn test_script_stops_reconnecting_when_refused() {
        let page: String = dashboard_page(&create_test_selectors()).into_string();

        assert!(page.contains("case \"connected\":"));
        assert!(page.contains("if (!refused)"));
    }

    #[test]
    fn test_option_text_is_escaped() {
        let mut selectors: Vec<SelectorInfo> = create_test_selectors();
        selectors[1].options.push(String::from("Daman & Diu"));

        let page: String = dashboard_page(&selectors).into_string();

        assert!(page.contains("Daman &amp; Diu"));
    }

    #[test]
    fn test_empty_options_show_no_data_message() {
        let selectors: Vec<SelectorInfo> = create_test_selectors()
            .into_iter()
            .map(|s| SelectorInfo {
                options: Vec::new(),
                selected: None,
                ..s
            })
            .collect();

        let page: String = dashboard_page(&selectors).into_string();

        assert!(page.contains("No tourism data is loaded."));
    }
}
