// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Reshaping of an [`AggregateView`] into the three dashboard charts.
//!
//! These functions only rearrange data already computed by the aggregation
//! engine; they never filter or sum anything themselves.

use serde::{Deserialize, Serialize};
use tourism_dash::AggregateView;

use crate::figure::{
    Axis, BarTrace, Figure, Font, Layout, Marker, PieTrace, ScatterTrace, Title, Trace,
};

/// Slice colours for the category pie. Reused in order when there are more
/// categories than colours.
pub const PIE_PALETTE: [&str; 5] = ["#ff9999", "#66b3ff", "#99ff99", "#ffcc99", "#c2c2f0"];

const REVENUE_COLOR: &str = "royalblue";
const ARRIVAL_COLOR: &str = "green";
const ARRIVAL_MARKER_SIZE: u32 = 10;
const AXIS_TITLE_SIZE: u32 = 14;
const PLOT_BACKGROUND: &str = "rgb(242, 242, 242)";
const PAPER_BACKGROUND: &str = "rgb(255, 255, 255)";
const FONT_FAMILY: &str = "Arial, sans-serif";

/// The three charts produced for one selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardFigures {
    pub revenue_growth: Figure,
    pub tourist_arrival: Figure,
    pub category_distribution: Figure,
}

/// Builds all three charts from one view.
#[must_use]
pub fn build_figures(view: &AggregateView) -> DashboardFigures {
    DashboardFigures {
        revenue_growth: revenue_growth_figure(view),
        tourist_arrival: tourist_arrival_figure(view),
        category_distribution: category_pie_figure(view),
    }
}

/// Bar chart of revenue per month.
#[must_use]
pub fn revenue_growth_figure(view: &AggregateView) -> Figure {
    let trace: BarTrace = BarTrace {
        x: view
            .monthly_revenue
            .iter()
            .map(|m| m.month_name().to_string())
            .collect(),
        y: view.monthly_revenue.iter().map(|m| m.value).collect(),
        name: String::from("Revenue Growth"),
        marker: Marker {
            color: Some(String::from(REVENUE_COLOR)),
            ..Marker::default()
        },
    };

    Figure {
        data: vec![Trace::Bar(trace)],
        layout: Layout {
            title: Title::new("Monthly Revenue Growth in India (INR)"),
            xaxis: Some(Axis {
                title: Title::sized("Month", AXIS_TITLE_SIZE),
                tickangle: Some(45),
            }),
            yaxis: Some(Axis {
                title: Title::sized("Revenue (INR)", AXIS_TITLE_SIZE),
                tickangle: None,
            }),
            barmode: Some(String::from("group")),
            ..styled_layout()
        },
    }
}

/// Line chart of visitor arrivals per month.
#[must_use]
pub fn tourist_arrival_figure(view: &AggregateView) -> Figure {
    let trace: ScatterTrace = ScatterTrace {
        x: view
            .monthly_arrivals
            .iter()
            .map(|m| m.month_name().to_string())
            .collect(),
        y: view.monthly_arrivals.iter().map(|m| m.value).collect(),
        mode: String::from("lines+markers"),
        name: String::from("Tourist Arrival"),
        marker: Marker {
            color: Some(String::from(ARRIVAL_COLOR)),
            size: Some(ARRIVAL_MARKER_SIZE),
            ..Marker::default()
        },
    };

    Figure {
        data: vec![Trace::Scatter(trace)],
        layout: Layout {
            title: Title::new("Monthly Tourist Arrival Trend in India"),
            xaxis: Some(Axis {
                title: Title::sized("Month", AXIS_TITLE_SIZE),
                tickangle: None,
            }),
            yaxis: Some(Axis {
                title: Title::sized("Tourist Count", AXIS_TITLE_SIZE),
                tickangle: None,
            }),
            ..styled_layout()
        },
    }
}

/// Pie chart of rows per tourism category.
#[must_use]
pub fn category_pie_figure(view: &AggregateView) -> Figure {
    let trace: PieTrace = PieTrace {
        labels: view
            .category_counts
            .iter()
            .map(|c| c.category.clone())
            .collect(),
        values: view.category_counts.iter().map(|c| c.count).collect(),
        textinfo: String::from("percent+label"),
        marker: Marker {
            colors: Some(pie_colors(view.category_counts.len())),
            ..Marker::default()
        },
    };

    Figure {
        data: vec![Trace::Pie(trace)],
        layout: Layout {
            title: Title::new("Tourism Categories Distribution"),
            ..Layout::default()
        },
    }
}

/// Returns `count` slice colours, cycling through [`PIE_PALETTE`].
#[must_use]
pub fn pie_colors(count: usize) -> Vec<String> {
    PIE_PALETTE
        .iter()
        .cycle()
        .take(count)
        .map(|color| String::from(*color))
        .collect()
}

fn styled_layout() -> Layout {
    Layout {
        plot_bgcolor: Some(String::from(PLOT_BACKGROUND)),
        paper_bgcolor: Some(String::from(PAPER_BACKGROUND)),
        font: Some(Font {
            family: Some(String::from(FONT_FAMILY)),
            size: None,
        }),
        ..Layout::default()
    }
}
