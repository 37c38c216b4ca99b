// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::path::PathBuf;
use thiserror::Error;
use tourism_dash_domain::DomainError;

/// Errors raised while loading the source table.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The source file could not be opened or read.
    #[error("Failed to read dataset '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The table is malformed or a numeric field could not be parsed.
    #[error("Malformed dataset: {source}")]
    Csv {
        #[from]
        source: csv::Error,
    },

    /// One or more required columns are absent from the header row.
    #[error("Missing required columns: {}", columns.join(", "))]
    MissingColumns { columns: Vec<String> },

    /// A row was read but violates a domain rule (for example an unknown month).
    #[error("Invalid record at row {row}: {source}")]
    InvalidRecord {
        /// The 1-based data row number, excluding the header.
        row: usize,
        #[source]
        source: DomainError,
    },
}
