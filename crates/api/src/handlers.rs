// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request handlers for the dashboard.
//!
//! Every handler is a pure function of the loaded records, the option lists,
//! and the caller's selection. Transport concerns (HTTP, WebSocket) live in
//! the server crate.

use tourism_dash::{AggregateView, SelectorOptions, aggregate};
use tourism_dash_domain::{Dimension, SelectionState, VisitRecord};
use tracing::{debug, info};

use crate::charts::{DashboardFigures, build_figures};
use crate::error::{ApiError, ApiResult};
use crate::request_response::{
    DashboardRequest, DashboardResponse, OptionsResponse, SelectorInfo,
};

/// Lists the selector options and the default selection.
#[must_use]
pub fn list_options(options: &SelectorOptions) -> OptionsResponse {
    OptionsResponse {
        years: options.years.clone(),
        regions: options.regions.clone(),
        purposes: options.purposes.clone(),
        default_selection: options.default_selection(),
    }
}

/// Describes the three selectors in layout order, marking `selection` as
/// chosen.
#[must_use]
pub fn describe_selectors(
    options: &SelectorOptions,
    selection: Option<&SelectionState>,
) -> Vec<SelectorInfo> {
    Dimension::ALL
        .into_iter()
        .map(|dimension| SelectorInfo {
            dimension,
            label: dimension.label().to_string(),
            options: options.options_for(dimension),
            selected: selection.map(|s| s.value_of(dimension)),
        })
        .collect()
}

/// Computes the three charts for a dashboard request.
///
/// # Arguments
///
/// * `records` - The loaded visit records
/// * `options` - The selector option lists derived from `records`
/// * `request` - The selected year, region, and purpose
///
/// # Errors
///
/// Returns `ApiError::UnknownSelection` if any selected value is not one
/// of the available options. A valid selection that matches no rows is not
/// an error; it produces empty charts.
pub fn update_dashboard(
    records: &[VisitRecord],
    options: &SelectorOptions,
    request: &DashboardRequest,
) -> ApiResult<DashboardResponse> {
    let selection: SelectionState = request.to_selection();
    render_selection(records, options, &selection)
}

/// Computes the three charts for a selection.
///
/// # Errors
///
/// Returns `ApiError::UnknownSelection` if the selection is not made of
/// available options, and `ApiError::Rendering` if a monthly total is out of
/// range.
pub fn render_selection(
    records: &[VisitRecord],
    options: &SelectorOptions,
    selection: &SelectionState,
) -> ApiResult<DashboardResponse> {
    options.validate(selection)?;

    let view: AggregateView = aggregate(records, selection)?;
    let figures: DashboardFigures = build_figures(&view);

    info!(
        year = selection.year,
        region = %selection.region,
        purpose = %selection.purpose,
        rows = view.row_count(),
        "Rendered dashboard"
    );

    Ok(DashboardResponse {
        selection: selection.clone(),
        row_count: view.row_count(),
        figures,
    })
}

/// Applies one selector change to a session's current selection.
///
/// # Arguments
///
/// * `options` - The selector option lists
/// * `current` - The session's current selection
/// * `dimension` - The dimension name (`year`, `region`, or `purpose`)
/// * `value` - The newly selected value
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` for an unknown dimension or a
/// non-numeric year, and `ApiError::UnknownSelection` for a value that is
/// not among the options. On error the current selection is unchanged.
pub fn apply_selection_change(
    options: &SelectorOptions,
    current: &SelectionState,
    dimension: &str,
    value: &str,
) -> ApiResult<SelectionState> {
    let dimension: Dimension = dimension.parse()?;
    let next: SelectionState = current.with_value(dimension, value)?;
    options.validate(&next)?;

    debug!(%dimension, value, "Selection changed");
    Ok(next)
}

/// Returns the selection a new session starts with.
///
/// # Errors
///
/// Returns `ApiError::NoData` when the dataset is empty.
pub fn initial_selection(
    options: &SelectorOptions,
    requested: Option<&SelectionState>,
) -> ApiResult<SelectionState> {
    tourism_dash::resolve_selection(options, requested).ok_or(ApiError::NoData)
}
