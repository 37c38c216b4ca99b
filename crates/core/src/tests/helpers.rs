// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

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

/// The three Goa rows from the worked example.
pub fn create_goa_records() -> Vec<VisitRecord> {
    vec![
        create_record(2023, Month::January, "Goa", "Leisure", 1000.0, 50, "Beach"),
        create_record(2023, Month::January, "Goa", "Leisure", 500.0, 20, "Beach"),
        create_record(2023, Month::February, "Goa", "Leisure", 300.0, 10, "Adventure"),
    ]
}

/// A mixed table spanning several years, regions, and purposes.
pub fn create_mixed_records() -> Vec<VisitRecord> {
    let mut records: Vec<VisitRecord> = create_goa_records();
    records.extend([
        create_record(2023, Month::March, "Goa", "Business", 700.0, 7, "Beach"),
        create_record(2022, Month::January, "Goa", "Leisure", 900.0, 90, "Beach"),
        create_record(2023, Month::January, "Kerala", "Leisure", 400.0, 40, "Backwaters"),
        create_record(2024, Month::December, "Rajasthan", "Pilgrimage", 250.0, 25, "Heritage"),
        create_record(2023, Month::March, "Goa", "Leisure", 120.5, 3, "Wildlife"),
        create_record(2023, Month::February, "Goa", "Leisure", 80.0, 4, "Beach"),
    ]);
    records
}
