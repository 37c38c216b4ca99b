// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use tourism_dash::SelectorOptions;
use tourism_dash_domain::{Month, VisitRecord};

pub fn create_record(
    year: i32,
    month: Month,
    region: &str,
    purpose: &str,
    revenue: f64,
    visitors: u64,
    category: &str,
) -> VisitRecord {
    VisitRecord::new(year, month, region, purpose, revenue, visitors, category).unwrap()
}

pub fn create_test_records() -> Vec<VisitRecord> {
    vec![
        create_record(2023, Month::January, "Goa", "Leisure", 1000.0, 50, "Beach"),
        create_record(2023, Month::January, "Goa", "Leisure", 500.0, 20, "Beach"),
        create_record(2023, Month::February, "Goa", "Leisure", 300.0, 10, "Adventure"),
        create_record(2022, Month::June, "Kerala", "Business", 800.0, 30, "Backwaters"),
    ]
}

pub fn create_test_options(records: &[VisitRecord]) -> SelectorOptions {
    SelectorOptions::from_records(records)
}
