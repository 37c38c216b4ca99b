// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use csv::StringRecord;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tourism_dash_domain::{DomainError, Month, VisitRecord};
use tracing::{debug, info};

use crate::error::DatasetError;

/// Column headings the source table must provide.
pub const REQUIRED_COLUMNS: &[&str] = &[
    "Year",
    "Month",
    "State/UT",
    "Purpose of Visit",
    "Revenue (INR)",
    "Tourist Count",
    "Tourism Category",
];

/// A raw source row, before month normalization.
#[derive(Debug, Deserialize)]
struct RawVisitRow {
    #[serde(rename = "Year")]
    year: i32,
    #[serde(rename = "Month")]
    month: String,
    #[serde(rename = "State/UT")]
    region: String,
    #[serde(rename = "Purpose of Visit")]
    purpose: String,
    #[serde(rename = "Revenue (INR)")]
    revenue: f64,
    #[serde(rename = "Tourist Count")]
    tourist_count: u64,
    #[serde(rename = "Tourism Category")]
    category: String,
}

impl RawVisitRow {
    fn into_record(self) -> Result<VisitRecord, DomainError> {
        let month: Month = Month::from_name(&self.month)?;
        VisitRecord::new(
            self.year,
            month,
            &self.region,
            &self.purpose,
            self.revenue,
            self.tourist_count,
            &self.category,
        )
    }
}

/// The loaded visit table.
///
/// Records keep the order they had in the source file. There is no way to
/// modify a dataset after it has been built.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<VisitRecord>,
}

impl Dataset {
    /// Builds a dataset from already-validated records.
    #[must_use]
    pub const fn from_records(records: Vec<VisitRecord>) -> Self {
        Self { records }
    }

    /// Loads the dataset from a CSV file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened, the table is malformed,
    /// a required column is missing, or any row holds an invalid month.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path: &Path = path.as_ref();
        let file: File = File::open(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let dataset: Self = Self::from_reader(file)?;
        info!(
            path = %path.display(),
            rows = dataset.len(),
            "Loaded tourism dataset"
        );
        Ok(dataset)
    }

    /// Loads the dataset from any CSV source.
    ///
    /// # Errors
    ///
    /// See [`Dataset::from_path`].
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(false)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers: StringRecord = reader.headers()?.clone();
        validate_headers(&headers)?;

        let mut records: Vec<VisitRecord> = Vec::new();
        for (index, result) in reader.deserialize::<RawVisitRow>().enumerate() {
            let row: usize = index + 1;
            let raw: RawVisitRow = result?;
            let record: VisitRecord = raw.into_record().map_err(|source| {
                debug!(row, error = %source, "Rejected dataset row");
                DatasetError::InvalidRecord { row, source }
            })?;
            records.push(record);
        }

        Ok(Self { records })
    }

    /// All records, in source order.
    #[must_use]
    pub fn records(&self) -> &[VisitRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Checks that every required column is present, reporting all missing ones.
fn validate_headers(headers: &StringRecord) -> Result<(), DatasetError> {
    let present: HashSet<&str> = headers.iter().collect();

    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|column| !present.contains(*column))
        .map(|column| String::from(*column))
        .collect();

    if !missing.is_empty() {
        return Err(DatasetError::MissingColumns { columns: missing });
    }

    Ok(())
}
