// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DomainError, Month, first_of_month};

#[test]
fn test_name_code_name_round_trip_for_every_month() {
    for month in Month::ALL {
        let code: &str = month.code();
        let from_code: Month = Month::from_code(code).unwrap();
        assert_eq!(from_code, month);
        assert_eq!(Month::from_name(from_code.name()).unwrap(), month);
    }
}

#[test]
fn test_codes_are_two_digit_and_match_number() {
    for month in Month::ALL {
        assert_eq!(month.code().len(), 2);
        assert_eq!(month.code(), format!("{:02}", month.number()));
        assert_eq!(Month::from_number(month.number()).unwrap(), month);
    }
}

#[test]
fn test_from_name_ignores_surrounding_whitespace() {
    assert_eq!(Month::from_name("  March ").unwrap(), Month::March);
}

#[test]
fn test_from_name_rejects_unknown_name() {
    let err: DomainError = Month::from_name("Smarch").unwrap_err();
    assert_eq!(err, DomainError::InvalidMonth(String::from("Smarch")));
}

#[test]
fn test_from_name_is_exact_about_case_and_abbreviation() {
    assert!(Month::from_name("january").is_err());
    assert!(Month::from_name("Jan").is_err());
}

#[test]
fn test_from_code_rejects_out_of_range_codes() {
    assert!(Month::from_code("00").is_err());
    assert!(Month::from_code("13").is_err());
    assert!(Month::from_code("1").is_err());
}

#[test]
fn test_from_number_rejects_out_of_range_numbers() {
    assert_eq!(
        Month::from_number(0).unwrap_err(),
        DomainError::InvalidMonth(String::from("00"))
    );
    assert_eq!(
        Month::from_number(13).unwrap_err(),
        DomainError::InvalidMonth(String::from("13"))
    );
}

#[test]
fn test_months_order_by_calendar_position() {
    let mut months: Vec<Month> = vec![Month::December, Month::February, Month::January];
    months.sort();
    assert_eq!(months, vec![Month::January, Month::February, Month::December]);
}

#[test]
fn test_parse_via_from_str_and_display() {
    let month: Month = "October".parse().unwrap();
    assert_eq!(month, Month::October);
    assert_eq!(month.to_string(), "October");
}

#[test]
fn test_serializes_as_month_name() {
    let json: String = serde_json::to_string(&Month::July).unwrap();
    assert_eq!(json, "\"July\"");
}

#[test]
fn test_first_of_month() {
    let date: time::Date = first_of_month(2023, Month::February).unwrap();
    assert_eq!(date.year(), 2023);
    assert_eq!(date.month(), time::Month::February);
    assert_eq!(date.day(), 1);
}

#[test]
fn test_first_of_month_rejects_unrepresentable_year() {
    let err: DomainError = first_of_month(1_000_000, Month::January).unwrap_err();
    assert!(matches!(err, DomainError::InvalidDate { year: 1_000_000, .. }));
}
