// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Filtering and aggregation of visit records for one selection.
//!
//! Every call starts from the full record slice and builds a fresh
//! [`AggregateView`]. Nothing is cached between calls.

use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use tourism_dash_domain::{Month, SelectionState, VisitRecord};

use crate::error::CoreError;

const REVENUE_MEASURE: &str = "Revenue (INR)";
const ARRIVALS_MEASURE: &str = "Tourist Count";

/// A per-month total for a single year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyTotal<T> {
    /// The year of the grouped rows.
    pub year: i32,
    /// The month of the grouped rows.
    pub month: Month,
    /// The summed value.
    pub value: T,
}

impl<T> MonthlyTotal<T> {
    /// The full calendar name of the month, for display.
    #[must_use]
    pub const fn month_name(&self) -> &'static str {
        self.month.name()
    }
}

/// The number of filtered rows in one tourism category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

/// The three summaries computed for a selection.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct AggregateView {
    /// Revenue summed per (year, month), in calendar order.
    pub monthly_revenue: Vec<MonthlyTotal<f64>>,
    /// Visitor count summed per (year, month), in calendar order.
    pub monthly_arrivals: Vec<MonthlyTotal<u64>>,
    /// Row count per category, largest first; ties in name order.
    pub category_counts: Vec<CategoryCount>,
}

impl AggregateView {
    /// Returns whether the selection matched no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.category_counts.is_empty()
    }

    /// The number of rows that matched the selection.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.category_counts.iter().map(|c| c.count).sum()
    }

    /// Revenue summed across all months.
    #[must_use]
    pub fn total_revenue(&self) -> f64 {
        self.monthly_revenue.iter().map(|m| m.value).sum()
    }

    /// Visitors summed across all months, widened so it cannot overflow.
    #[must_use]
    pub fn total_arrivals(&self) -> u128 {
        self.monthly_arrivals
            .iter()
            .map(|m| u128::from(m.value))
            .sum()
    }
}

/// Returns the records that match all three selected values.
pub fn filter_records<'a>(
    records: &'a [VisitRecord],
    selection: &'a SelectionState,
) -> impl Iterator<Item = &'a VisitRecord> + 'a {
    records.iter().filter(move |record| record.matches(selection))
}

/// Filters `records` by `selection` and computes the three summaries.
///
/// An empty match yields an empty view rather than an error.
///
/// # Errors
///
/// Returns `CoreError::TotalOutOfRange` if a month's revenue sum is not a
/// finite number or its visitor sum does not fit in a `u64`.
pub fn aggregate(
    records: &[VisitRecord],
    selection: &SelectionState,
) -> Result<AggregateView, CoreError> {
    let mut monthly: BTreeMap<(i32, Month), (f64, u64)> = BTreeMap::new();
    let mut categories: HashMap<&str, usize> = HashMap::new();

    for record in filter_records(records, selection) {
        let (year, month) = (record.year(), record.month());
        let out_of_range = |measure: &'static str| CoreError::TotalOutOfRange {
            year,
            month,
            measure,
        };

        let totals = monthly.entry((year, month)).or_insert((0.0, 0));
        totals.0 += record.revenue();
        if !totals.0.is_finite() {
            return Err(out_of_range(REVENUE_MEASURE));
        }
        totals.1 = totals
            .1
            .checked_add(record.visitor_count())
            .ok_or_else(|| out_of_range(ARRIVALS_MEASURE))?;

        *categories.entry(record.category()).or_insert(0) += 1;
    }

    let monthly_revenue: Vec<MonthlyTotal<f64>> = monthly
        .iter()
        .map(|(&(year, month), &(revenue, _))| MonthlyTotal {
            year,
            month,
            value: revenue,
        })
        .collect();

    let monthly_arrivals: Vec<MonthlyTotal<u64>> = monthly
        .iter()
        .map(|(&(year, month), &(_, visitors))| MonthlyTotal {
            year,
            month,
            value: visitors,
        })
        .collect();

    let mut category_counts: Vec<CategoryCount> = categories
        .into_iter()
        .map(|(category, count)| CategoryCount {
            category: category.to_string(),
            count,
        })
        .collect();
    category_counts.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.category.cmp(&b.category))
    });

    Ok(AggregateView {
        monthly_revenue,
        monthly_arrivals,
        category_counts,
    })
}
