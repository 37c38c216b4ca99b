// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod aggregate;
mod error;
mod selectors;

#[cfg(test)]
mod tests;

use tourism_dash_domain::SelectionState;

// Re-export public types and functions
pub use aggregate::{AggregateView, CategoryCount, MonthlyTotal, aggregate, filter_records};
pub use error::CoreError;
pub use selectors::SelectorOptions;

/// Resolves the selection for the first render.
///
/// Uses the requested selection when every value is available, and falls
/// back to the default selection otherwise.
///
/// # Arguments
///
/// * `options` - The selector option lists
/// * `requested` - A selection carried over from a previous render, if any
///
/// # Returns
///
/// * `Some(selection)` when the options are non-empty
/// * `None` when there is nothing to select from
#[must_use]
pub fn resolve_selection(
    options: &SelectorOptions,
    requested: Option<&SelectionState>,
) -> Option<SelectionState> {
    match requested {
        Some(selection) if options.contains(selection) => Some(selection.clone()),
        _ => options.default_selection(),
    }
}
