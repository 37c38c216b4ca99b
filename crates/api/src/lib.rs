// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Presentation layer for the Tourism Insights dashboard.
//!
//! Turns a selection into the three chart specifications the page draws:
//! monthly revenue (bar), monthly arrivals (line), and category
//! distribution (pie).

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

mod charts;
mod error;
mod figure;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use charts::{
    DashboardFigures, PIE_PALETTE, build_figures, category_pie_figure, pie_colors,
    revenue_growth_figure, tourist_arrival_figure,
};
pub use error::{ApiError, ApiResult};
pub use figure::{Axis, BarTrace, Figure, Font, Layout, Marker, PieTrace, ScatterTrace, Title, Trace};
pub use handlers::{
    apply_selection_change, describe_selectors, initial_selection, list_options,
    render_selection, update_dashboard,
};
pub use request_response::{DashboardRequest, DashboardResponse, OptionsResponse, SelectorInfo};
