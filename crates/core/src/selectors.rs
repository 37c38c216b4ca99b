// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::Serialize;
use std::collections::BTreeSet;
use tourism_dash_domain::{Dimension, SelectionState, VisitRecord};

use crate::error::CoreError;

/// The option lists for the three selectors.
///
/// Each list holds the distinct values present in the loaded table, sorted
/// ascending: numerically for years, lexically for regions and purposes.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SelectorOptions {
    /// Distinct years, ascending.
    pub years: Vec<i32>,
    /// Distinct states / union territories, ascending.
    pub regions: Vec<String>,
    /// Distinct purposes of visit, ascending.
    pub purposes: Vec<String>,
}

impl SelectorOptions {
    /// Derives the option lists from the loaded records.
    #[must_use]
    pub fn from_records(records: &[VisitRecord]) -> Self {
        let mut years: BTreeSet<i32> = BTreeSet::new();
        let mut regions: BTreeSet<&str> = BTreeSet::new();
        let mut purposes: BTreeSet<&str> = BTreeSet::new();

        for record in records {
            years.insert(record.year());
            regions.insert(record.region());
            purposes.insert(record.purpose());
        }

        Self {
            years: years.into_iter().collect(),
            regions: regions.into_iter().map(String::from).collect(),
            purposes: purposes.into_iter().map(String::from).collect(),
        }
    }

    /// Returns the initial selection: the minimum year and the first region
    /// and purpose in sorted order.
    ///
    /// Returns `None` when there are no records to choose from.
    #[must_use]
    pub fn default_selection(&self) -> Option<SelectionState> {
        let year: i32 = *self.years.first()?;
        let region: &String = self.regions.first()?;
        let purpose: &String = self.purposes.first()?;
        Some(SelectionState::new(year, region, purpose))
    }

    /// Returns the option labels for one dimension.
    #[must_use]
    pub fn options_for(&self, dimension: Dimension) -> Vec<String> {
        match dimension {
            Dimension::Year => self.years.iter().map(ToString::to_string).collect(),
            Dimension::Region => self.regions.clone(),
            Dimension::Purpose => self.purposes.clone(),
        }
    }

    /// Returns whether every selected value is one of the available options.
    #[must_use]
    pub fn contains(&self, selection: &SelectionState) -> bool {
        self.validate(selection).is_ok()
    }

    /// Checks a selection against the option lists.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::UnknownSelection` naming the first dimension
    /// whose value is not available.
    pub fn validate(&self, selection: &SelectionState) -> Result<(), CoreError> {
        if self.years.binary_search(&selection.year).is_err() {
            return Err(CoreError::UnknownSelection {
                dimension: Dimension::Year,
                value: selection.year.to_string(),
            });
        }
        if self.regions.binary_search(&selection.region).is_err() {
            return Err(CoreError::UnknownSelection {
                dimension: Dimension::Region,
                value: selection.region.clone(),
            });
        }
        if self.purposes.binary_search(&selection.purpose).is_err() {
            return Err(CoreError::UnknownSelection {
                dimension: Dimension::Purpose,
                value: selection.purpose.clone(),
            });
        }
        Ok(())
    }
}
