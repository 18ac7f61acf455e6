// ABOUTME: Date formatting for the meal lookup pipeline
// ABOUTME: Localized long display form and compact upstream request form
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dosirak Contributors

//! Date formatters.
//!
//! Dates are calendar values, not instants: no timezone conversion happens
//! anywhere in the pipeline. The display form follows the target locale's
//! year-month-day ordering with a Sunday-first weekday table; the request
//! form is the compact numeric shape the upstream API expects.

use chrono::{Datelike, NaiveDate};

use crate::constants::calendar::WEEKDAY_NAMES;

/// Format a date for report display
///
/// Produces `"{year} year {month} month {day} day ({weekday})"` with the
/// weekday drawn from the fixed Sunday-first naming table. Month and day are
/// unpadded.
#[must_use]
pub fn format_display_date(date: NaiveDate) -> String {
    let weekday = WEEKDAY_NAMES[date.weekday().num_days_from_sunday() as usize];
    format!(
        "{} year {} month {} day ({weekday})",
        date.year(),
        date.month(),
        date.day()
    )
}

/// Format a date for the upstream query (compact numeric form, no separators)
#[must_use]
pub fn format_request_date(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_date_weekday_from_fixed_table() {
        // 2025-03-05 is a Wednesday
        let date = NaiveDate::from_ymd_opt(2025, 3, 5).expect("valid date");
        assert_eq!(format_display_date(date), "2025 year 3 month 5 day (Wednesday)");
    }

    #[test]
    fn test_display_date_sunday_first_index() {
        // 2025-03-02 is a Sunday, the first entry of the table
        let date = NaiveDate::from_ymd_opt(2025, 3, 2).expect("valid date");
        assert!(format_display_date(date).ends_with("(Sunday)"));
    }

    #[test]
    fn test_display_date_unpadded_month_and_day() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 9).expect("valid date");
        assert_eq!(format_display_date(date), "2024 year 1 month 9 day (Tuesday)");
    }

    #[test]
    fn test_request_date_compact_form() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 5).expect("valid date");
        assert_eq!(format_request_date(date), "20250305");
    }

    #[test]
    fn test_request_date_zero_pads() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 9).expect("valid date");
        assert_eq!(format_request_date(date), "20240109");
    }
}
