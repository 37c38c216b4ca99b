// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! One-time loading of the tourism visit table.
//!
//! The loader reads the source CSV exactly once, maps every month name to its
//! calendar month, derives the first-of-month date for each row, and returns
//! an immutable [`Dataset`]. Any failure here is fatal for the caller: there
//! is no partial dataset.

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

mod error;
mod loader;

pub use error::DatasetError;
pub use loader::{Dataset, REQUIRED_COLUMNS};
