//! Deterministic synthesis of new calendars from wizard input.

use crate::model::{Age, Calendar, CreateCalendarInput, Month};

/// Year length used when the configuration has none yet.
pub const DEFAULT_DAYS_IN_YEAR: i64 = 365;

pub const DEFAULT_AGE_NAME: &str = "First Age";
pub const DEFAULT_AGE_ABBREVIATION: &str = "FA";

pub const GENERATED_MONTHS: usize = 12;
pub const GENERATED_MONTH_DAYS: i64 = 30;

/// Build a calendar with one default age and twelve generated months.
///
/// Returns the calendar and the effective year length: `current_days_in_year`
/// unchanged, or [`DEFAULT_DAYS_IN_YEAR`] when it is 0.
///
/// Months 1-11 get 30 days and month 12 takes the remainder of the year.
/// For a year shorter than 330 days the remainder is negative and is kept
/// as-is; [`Calendar::has_negative_months`] reports it. A remainder below
/// `i64::MIN` saturates.
pub fn build_calendar(input: CreateCalendarInput, current_days_in_year: i64) -> (Calendar, i64) {
    let days_in_year = if current_days_in_year == 0 {
        DEFAULT_DAYS_IN_YEAR
    } else {
        current_days_in_year
    };

    let ages = vec![Age::new(
        DEFAULT_AGE_NAME,
        DEFAULT_AGE_ABBREVIATION,
        input.total_years,
    )];

    let mut days_left = days_in_year;
    let months = (1..=GENERATED_MONTHS)
        .map(|i| {
            let days = if i == GENERATED_MONTHS {
                days_left
            } else {
                GENERATED_MONTH_DAYS
            };
            days_left = days_left.saturating_sub(days);
            Month::new(format!("Month {i}"), days)
        })
        .collect();

    let calendar = Calendar {
        name: input.name,
        abbreviation: input.abbreviation,
        start_year: input.start_year,
        total_years: input.total_years,
        ages,
        months,
    };

    (calendar, days_in_year)
}
