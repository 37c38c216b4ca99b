// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use tourism_dash_domain::{Dimension, DomainError, Month};

/// Errors that can occur while resolving a selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// A selected value is not among the options for its dimension.
    UnknownSelection {
        /// The dimension the value was selected for.
        dimension: Dimension,
        /// The selected value.
        value: String,
    },
    /// A monthly sum left the range its type can represent.
    TotalOutOfRange {
        /// The year of the grouped rows.
        year: i32,
        /// The month of the grouped rows.
        month: Month,
        /// The source column being summed.
        measure: &'static str,
    },
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::UnknownSelection { dimension, value } => {
                write!(
                    f,
                    "'{value}' is not an available {} option",
                    dimension.label()
                )
            }
            Self::TotalOutOfRange {
                year,
                month,
                measure,
            } => {
                write!(f, "{measure} total for {month} {year} is out of range")
            }
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
