// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::month::{Month, first_of_month};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One observed row of tourism statistics.
///
/// A record is immutable once built. The `date` attribute is derived from
/// `year` and `month` at construction time and always points at the first
/// day of that month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisitRecord {
    year: i32,
    month: Month,
    region: String,
    purpose: String,
    revenue: f64,
    visitor_count: u64,
    category: String,
    date: time::Date,
}

impl VisitRecord {
    /// Creates a new visit record and derives its date.
    ///
    /// # Arguments
    ///
    /// * `year` - The calendar year
    /// * `month` - The calendar month
    /// * `region` - The state or union territory
    /// * `purpose` - The purpose of visit
    /// * `revenue` - Revenue in currency units
    /// * `visitor_count` - Number of tourists
    /// * `category` - The tourism category
    ///
    /// # Errors
    ///
    /// Returns an error if a text attribute is empty, the revenue is not a
    /// finite number, or the year/month is not a representable date.
    pub fn new(
        year: i32,
        month: Month,
        region: &str,
        purpose: &str,
        revenue: f64,
        visitor_count: u64,
        category: &str,
    ) -> Result<Self, DomainError> {
        let region: String = required_text("region", region)?;
        let purpose: String = required_text("purpose", purpose)?;
        let category: String = required_text("category", category)?;

        if !revenue.is_finite() {
            return Err(DomainError::InvalidRevenue(revenue.to_string()));
        }

        let date: time::Date = first_of_month(year, month)?;

        Ok(Self {
            year,
            month,
            region,
            purpose,
            revenue,
            visitor_count,
            category,
            date,
        })
    }

    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    #[must_use]
    pub const fn month(&self) -> Month {
        self.month
    }

    #[must_use]
    pub fn region(&self) -> &str {
        &self.region
    }

    #[must_use]
    pub fn purpose(&self) -> &str {
        &self.purpose
    }

    #[must_use]
    pub const fn revenue(&self) -> f64 {
        self.revenue
    }

    #[must_use]
    pub const fn visitor_count(&self) -> u64 {
        self.visitor_count
    }

    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// The first day of the record's year and month.
    #[must_use]
    pub const fn date(&self) -> time::Date {
        self.date
    }

    /// Returns whether this record satisfies all three selection equalities.
    #[must_use]
    pub fn matches(&self, selection: &SelectionState) -> bool {
        self.year == selection.year
            && self.region == selection.region
            && self.purpose == selection.purpose
    }
}

fn required_text(field: &'static str, value: &str) -> Result<String, DomainError> {
    let trimmed: &str = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::EmptyField { field });
    }
    Ok(trimmed.to_string())
}

/// One of the three independent filter axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Year,
    Region,
    Purpose,
}

impl Dimension {
    /// All dimensions in the order the selectors are laid out.
    pub const ALL: [Self; 3] = [Self::Year, Self::Region, Self::Purpose];

    /// The identifier used in queries and messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::Region => "region",
            Self::Purpose => "purpose",
        }
    }

    /// The column heading used for this dimension in the source data.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Year => "Year",
            Self::Region => "State/UT",
            Self::Purpose => "Purpose of Visit",
        }
    }
}

impl FromStr for Dimension {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "year" => Ok(Self::Year),
            "region" => Ok(Self::Region),
            "purpose" => Ok(Self::Purpose),
            _ => Err(DomainError::UnknownDimension(s.to_string())),
        }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The current filter choices driving what is displayed.
///
/// A selection is owned by a single session and is never shared or
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectionState {
    /// The selected year.
    pub year: i32,
    /// The selected state or union territory.
    pub region: String,
    /// The selected purpose of visit.
    pub purpose: String,
}

impl SelectionState {
    /// Creates a new selection.
    #[must_use]
    pub fn new(year: i32, region: &str, purpose: &str) -> Self {
        Self {
            year,
            region: region.to_string(),
            purpose: purpose.to_string(),
        }
    }

    /// Returns the selected value for a dimension as display text.
    #[must_use]
    pub fn value_of(&self, dimension: Dimension) -> String {
        match dimension {
            Dimension::Year => self.year.to_string(),
            Dimension::Region => self.region.clone(),
            Dimension::Purpose => self.purpose.clone(),
        }
    }

    /// Returns a copy of this selection with one dimension changed.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidYear` if `dimension` is `Year` and
    /// `value` is not an integer.
    pub fn with_value(&self, dimension: Dimension, value: &str) -> Result<Self, DomainError> {
        let mut next: Self = self.clone();
        match dimension {
            Dimension::Year => next.year = parse_year(value)?,
            Dimension::Region => next.region = value.to_string(),
            Dimension::Purpose => next.purpose = value.to_string(),
        }
        Ok(next)
    }
}

/// Parses a year value from text.
///
/// # Errors
///
/// Returns `DomainError::InvalidYear` if the text is not an integer.
pub fn parse_year(value: &str) -> Result<i32, DomainError> {
    value
        .trim()
        .parse::<i32>()
        .map_err(|_| DomainError::InvalidYear(value.to_string()))
}
