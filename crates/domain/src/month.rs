// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Calendar months and the fixed name/code lookup used by the source data.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A calendar month.
///
/// Source rows carry the full English month name. Internally the month is
/// ordered by its position in the calendar, so sorting by `Month` gives
/// January first and December last.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    /// All months in calendar order.
    pub const ALL: [Self; 12] = [
        Self::January,
        Self::February,
        Self::March,
        Self::April,
        Self::May,
        Self::June,
        Self::July,
        Self::August,
        Self::September,
        Self::October,
        Self::November,
        Self::December,
    ];

    /// The month's position in the calendar, from 1 to 12.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::January => 1,
            Self::February => 2,
            Self::March => 3,
            Self::April => 4,
            Self::May => 5,
            Self::June => 6,
            Self::July => 7,
            Self::August => 8,
            Self::September => 9,
            Self::October => 10,
            Self::November => 11,
            Self::December => 12,
        }
    }

    /// The two-digit numeric code (`"01"` through `"12"`).
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::January => "01",
            Self::February => "02",
            Self::March => "03",
            Self::April => "04",
            Self::May => "05",
            Self::June => "06",
            Self::July => "07",
            Self::August => "08",
            Self::September => "09",
            Self::October => "10",
            Self::November => "11",
            Self::December => "12",
        }
    }

    /// The full calendar name, as used for display.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::January => "January",
            Self::February => "February",
            Self::March => "March",
            Self::April => "April",
            Self::May => "May",
            Self::June => "June",
            Self::July => "July",
            Self::August => "August",
            Self::September => "September",
            Self::October => "October",
            Self::November => "November",
            Self::December => "December",
        }
    }

    /// Looks up a month by its full calendar name.
    ///
    /// Surrounding whitespace is ignored; the name itself must match exactly.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidMonth` if the name is not one of the
    /// twelve calendar month names.
    pub fn from_name(name: &str) -> Result<Self, DomainError> {
        let trimmed: &str = name.trim();
        Self::ALL
            .into_iter()
            .find(|month| month.name() == trimmed)
            .ok_or_else(|| DomainError::InvalidMonth(trimmed.to_string()))
    }

    /// Looks up a month by its two-digit code.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidMonth` for anything other than `"01"`
    /// through `"12"`.
    pub fn from_code(code: &str) -> Result<Self, DomainError> {
        let trimmed: &str = code.trim();
        Self::ALL
            .into_iter()
            .find(|month| month.code() == trimmed)
            .ok_or_else(|| DomainError::InvalidMonth(trimmed.to_string()))
    }

    /// Looks up a month by its calendar position.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidMonth` if `number` is outside 1..=12.
    pub fn from_number(number: u8) -> Result<Self, DomainError> {
        match number {
            1..=12 => Ok(Self::ALL[usize::from(number - 1)]),
            _ => Err(DomainError::InvalidMonth(format!("{number:02}"))),
        }
    }
}

impl FromStr for Month {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl std::fmt::Display for Month {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl From<Month> for time::Month {
    fn from(month: Month) -> Self {
        match month {
            Month::January => Self::January,
            Month::February => Self::February,
            Month::March => Self::March,
            Month::April => Self::April,
            Month::May => Self::May,
            Month::June => Self::June,
            Month::July => Self::July,
            Month::August => Self::August,
            Month::September => Self::September,
            Month::October => Self::October,
            Month::November => Self::November,
            Month::December => Self::December,
        }
    }
}

/// Returns the first day of the given year and month.
///
/// # Errors
///
/// Returns `DomainError::InvalidDate` if the year is outside the range the
/// calendar supports.
pub fn first_of_month(year: i32, month: Month) -> Result<time::Date, DomainError> {
    time::Date::from_calendar_date(year, month.into(), 1).map_err(|e| DomainError::InvalidDate {
        year,
        month,
        reason: e.to_string(),
    })
}
