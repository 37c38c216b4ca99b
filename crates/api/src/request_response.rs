// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use serde::{Deserialize, Serialize};
use tourism_dash_domain::{Dimension, SelectionState};

use crate::charts::DashboardFigures;

/// API request for the charts of one selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardRequest {
    /// The selected year.
    pub year: i32,
    /// The selected state or union territory.
    pub region: String,
    /// The selected purpose of visit.
    pub purpose: String,
}

impl DashboardRequest {
    /// Converts this request into a selection.
    #[must_use]
    pub fn to_selection(&self) -> SelectionState {
        SelectionState::new(self.year, &self.region, &self.purpose)
    }
}

impl From<&SelectionState> for DashboardRequest {
    fn from(selection: &SelectionState) -> Self {
        Self {
            year: selection.year,
            region: selection.region.clone(),
            purpose: selection.purpose.clone(),
        }
    }
}

/// API response carrying all three charts for a selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardResponse {
    /// The selection the charts were computed for.
    pub selection: SelectionState,
    /// The number of rows that matched the selection.
    pub row_count: usize,
    /// The chart specifications.
    pub figures: DashboardFigures,
}

/// API response for the selector option lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionsResponse {
    /// Distinct years, ascending.
    pub years: Vec<i32>,
    /// Distinct states / union territories, ascending.
    pub regions: Vec<String>,
    /// Distinct purposes of visit, ascending.
    pub purposes: Vec<String>,
    /// The selection shown on first load, if there is any data.
    pub default_selection: Option<SelectionState>,
}

/// One selector as laid out on the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectorInfo {
    /// The dimension this selector controls.
    pub dimension: Dimension,
    /// The heading shown to the user.
    pub label: String,
    /// The option labels, in display order.
    pub options: Vec<String>,
    /// The currently selected option, if any.
    pub selected: Option<String>,
}
