// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::month::Month;

/// Errors that can occur while building or interpreting domain values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A month name or numeric code is not one of the twelve calendar months.
    InvalidMonth(String),
    /// The year and month do not form a representable calendar date.
    InvalidDate {
        /// The year value.
        year: i32,
        /// The month value.
        month: Month,
        /// The underlying calendar error.
        reason: String,
    },
    /// A year value could not be parsed.
    InvalidYear(String),
    /// A revenue value is not a finite number.
    InvalidRevenue(String),
    /// A required text attribute is empty.
    EmptyField {
        /// The attribute name.
        field: &'static str,
    },
    /// A filter dimension name is not recognised.
    UnknownDimension(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidMonth(value) => {
                write!(f, "Invalid month '{value}': expected a calendar month name or a code between 01 and 12")
            }
            Self::InvalidDate {
                year,
                month,
                reason,
            } => {
                write!(f, "Invalid date {year}-{}: {reason}", month.code())
            }
            Self::InvalidYear(value) => write!(f, "Invalid year: {value}"),
            Self::InvalidRevenue(value) => {
                write!(f, "Invalid revenue: {value} is not a finite number")
            }
            Self::EmptyField { field } => write!(f, "Field '{field}' must not be empty"),
            Self::UnknownDimension(value) => {
                write!(
                    f,
                    "Unknown dimension '{value}': expected year, region, or purpose"
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}
