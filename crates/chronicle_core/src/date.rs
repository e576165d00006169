//! Calendar-relative date parsing and linear day counts.
//!
//! Dates are written `AAYYYY-MM-DD`: a two character age abbreviation, a
//! four digit year, then two digit month and day, always zero padded.
//!
//! Resolution checks, in order, stopping at the first failure:
//! 1. shape (12 characters, `-` at positions 6 and 9)
//! 2. numerals (year, month and day are all digits)
//! 3. the age abbreviation exists in the calendar
//! 4. the month is within the calendar
//! 5. the day is within that month

use std::fmt;
use std::str::FromStr;

use crate::model::{Calendar, Event};

/// Number of characters in a date string.
pub const DATE_LEN: usize = 12;

const AGE_END: usize = 2;
const YEAR_END: usize = 6;
const MONTH_SEP: usize = 6;
const DAY_SEP: usize = 9;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    #[error("invalid format, date must be AAYYYY-MM-DD")]
    MalformedFormat,

    #[error("date contains invalid numbers")]
    InvalidNumeral,

    #[error("age abbreviation '{abbrev}' not found in calendar")]
    UnknownAge { abbrev: String },

    #[error("month must be between 1 and {max}")]
    MonthOutOfRange { month: usize, max: usize },

    #[error("day must be between 1 and {max} for month '{month_name}'")]
    DayOutOfRange {
        day: i64,
        max: i64,
        month_name: String,
    },

    #[error("date is too far from year 0 to count its days")]
    DayCountOverflow,
}

/// A syntactically valid date, not yet checked against any calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateStamp {
    pub age: String,
    pub year: i64,
    pub month: usize,
    pub day: i64,
}

fn parse_digits<T: FromStr>(chars: &[char]) -> Result<T, DateError> {
    if !chars.iter().all(|c| c.is_ascii_digit()) {
        return Err(DateError::InvalidNumeral);
    }
    chars
        .iter()
        .collect::<String>()
        .parse()
        .map_err(|_| DateError::InvalidNumeral)
}

impl FromStr for DateStamp {
    type Err = DateError;

    /// Checks shape and numerals only.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = raw.chars().collect();
        if chars.len() != DATE_LEN || chars[MONTH_SEP] != '-' || chars[DAY_SEP] != '-' {
            return Err(DateError::MalformedFormat);
        }

        let year = parse_digits(&chars[AGE_END..YEAR_END])?;
        let month = parse_digits(&chars[MONTH_SEP + 1..DAY_SEP])?;
        let day = parse_digits(&chars[DAY_SEP + 1..])?;

        Ok(Self {
            age: chars[..AGE_END].iter().collect(),
            year,
            month,
            day,
        })
    }
}

impl fmt::Display for DateStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{:04}-{:02}-{:02}",
            self.age, self.year, self.month, self.day
        )
    }
}

impl DateStamp {
    /// Check the stamp against a calendar's ages, months and month lengths.
    pub fn check(&self, calendar: &Calendar) -> Result<(), DateError> {
        if calendar.find_age(&self.age).is_none() {
            return Err(DateError::UnknownAge {
                abbrev: self.age.clone(),
            });
        }

        let month = calendar
            .month(self.month)
            .ok_or(DateError::MonthOutOfRange {
                month: self.month,
                max: calendar.months.len(),
            })?;

        if self.day < 1 || self.day > month.days {
            return Err(DateError::DayOutOfRange {
                day: self.day,
                max: month.days,
                month_name: month.name.clone(),
            });
        }
        Ok(())
    }
}

/// Linear day count of a checked stamp.
///
/// `year * days_in_year`, plus the days of every month before the stamp's
/// month, plus the day. The year term uses the shared `days_in_year`, not
/// the calendar's own month total, so calendars sharing a year length stay
/// comparable even when their month layouts differ.
///
/// Month lengths and `days_in_year` come from a hand-editable file, so a
/// count outside `i64` is an error rather than a wrap.
pub fn days_since_zero(
    calendar: &Calendar,
    stamp: &DateStamp,
    days_in_year: i64,
) -> Result<i64, DateError> {
    let preceding = calendar
        .months
        .iter()
        .take(stamp.month.saturating_sub(1))
        .try_fold(0i64, |acc, m| acc.checked_add(m.days))
        .ok_or(DateError::DayCountOverflow)?;

    stamp
        .year
        .checked_mul(days_in_year)
        .and_then(|days| days.checked_add(preceding))
        .and_then(|days| days.checked_add(stamp.day))
        .ok_or(DateError::DayCountOverflow)
}

/// Parse `raw` against `calendar`, producing an unnamed [`Event`].
pub fn resolve_date(raw: &str, calendar: &Calendar, days_in_year: i64) -> Result<Event, DateError> {
    let stamp: DateStamp = raw.parse()?;
    stamp.check(calendar)?;

    let days_since_zero = days_since_zero(calendar, &stamp, days_in_year)?;

    Ok(Event {
        calendar_name: calendar.name.clone(),
        calendar_abbrev: calendar.abbreviation.clone(),
        age_abbrev: stamp.age,
        year: stamp.year,
        month: stamp.month,
        day: stamp.day,
        days_since_zero,
        name: String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Age, Month};

    fn calendar() -> Calendar {
        Calendar {
            name: "Harptos".into(),
            abbreviation: "DR".into(),
            start_year: 0,
            total_years: 1000,
            ages: vec![Age::new("First Age", "FA", 1000)],
            months: (1..=12).map(|i| Month::new(format!("Month {i}"), 30)).collect(),
        }
    }

    #[test]
    fn test_resolve_first_month() {
        let event = resolve_date("FA0005-01-15", &calendar(), 365).unwrap();
        assert_eq!(event.days_since_zero, 5 * 365 + 15);
        assert_eq!(event.days_since_zero, 1840);
        assert_eq!(event.calendar_name, "Harptos");
        assert_eq!(event.calendar_abbrev, "DR");
        assert_eq!(event.age_abbrev, "FA");
        assert_eq!((event.year, event.month, event.day), (5, 1, 15));
        assert!(event.name.is_empty());
    }

    #[test]
    fn test_resolve_sums_preceding_months() {
        let mut cal = calendar();
        cal.months[0].days = 31;
        cal.months[1].days = 28;
        let event = resolve_date("FA0010-03-02", &cal, 365).unwrap();
        assert_eq!(event.days_since_zero, 10 * 365 + 31 + 28 + 2);
    }

    #[test]
    fn test_malformed_shape() {
        let cal = calendar();
        for raw in ["", "FA0005-01-1", "FA0005-01-155", "FA0005/01-15", "FA0005-01/15", "FA000501-15-"] {
            assert_eq!(
                resolve_date(raw, &cal, 365),
                Err(DateError::MalformedFormat),
                "{raw:?}"
            );
        }
    }

    #[test]
    fn test_malformed_wins_over_unknown_age() {
        assert_eq!(
            resolve_date("XY0005-1-15", &calendar(), 365),
            Err(DateError::MalformedFormat)
        );
    }

    #[test]
    fn test_invalid_numerals() {
        let cal = calendar();
        for raw in ["FA00x5-01-15", "FAabcd-01-15", "FA0005-+1-15", "FA0005-01- 5", "FA-005-01-15"] {
            assert_eq!(
                resolve_date(raw, &cal, 365),
                Err(DateError::InvalidNumeral),
                "{raw:?}"
            );
        }
    }

    #[test]
    fn test_numerals_checked_before_age() {
        assert_eq!(
            resolve_date("XY00x5-01-15", &calendar(), 365),
            Err(DateError::InvalidNumeral)
        );
    }

    #[test]
    fn test_unknown_age() {
        let err = resolve_date("XY0001-01-01", &calendar(), 365).unwrap_err();
        assert_eq!(
            err,
            DateError::UnknownAge {
                abbrev: "XY".into()
            }
        );
        assert_eq!(err.to_string(), "age abbreviation 'XY' not found in calendar");
    }

    #[test]
    fn test_age_is_case_sensitive() {
        assert!(matches!(
            resolve_date("fa0001-01-01", &calendar(), 365),
            Err(DateError::UnknownAge { .. })
        ));
    }

    #[test]
    fn test_month_out_of_range() {
        let cal = calendar();
        assert_eq!(
            resolve_date("FA0001-00-01", &cal, 365),
            Err(DateError::MonthOutOfRange { month: 0, max: 12 })
        );
        let err = resolve_date("FA0001-13-01", &cal, 365).unwrap_err();
        assert_eq!(err.to_string(), "month must be between 1 and 12");
    }

    #[test]
    fn test_day_out_of_range() {
        let cal = calendar();
        assert!(matches!(
            resolve_date("FA0001-01-00", &cal, 365),
            Err(DateError::DayOutOfRange { day: 0, max: 30, .. })
        ));
        let err = resolve_date("FA0001-02-31", &cal, 365).unwrap_err();
        assert_eq!(err.to_string(), "day must be between 1 and 30 for month 'Month 2'");
    }

    #[test]
    fn test_negative_month_rejects_every_day() {
        let mut cal = calendar();
        cal.months[11].days = -5;
        assert!(matches!(
            resolve_date("FA0001-12-01", &cal, 325),
            Err(DateError::DayOutOfRange { max: -5, .. })
        ));
    }

    #[test]
    fn test_duplicate_ages_first_match() {
        let mut cal = calendar();
        cal.ages.push(Age::new("Shadow Age", "FA", 5));
        assert!(resolve_date("FA0001-01-01", &cal, 365).is_ok());
    }

    #[test]
    fn test_multibyte_age_abbreviation() {
        let mut cal = calendar();
        cal.ages.push(Age::new("Æon", "ÆØ", 5));
        let event = resolve_date("ÆØ0002-01-01", &cal, 365).unwrap();
        assert_eq!(event.age_abbrev, "ÆØ");
        assert_eq!(event.days_since_zero, 731);
    }

    #[test]
    fn test_stamp_display_is_zero_padded() {
        let stamp: DateStamp = "FA0005-01-15".parse().unwrap();
        assert_eq!(stamp.to_string(), "FA0005-01-15");
        let event = resolve_date("FA0042-07-03", &calendar(), 365).unwrap();
        assert_eq!(event.stamp().to_string(), "FA0042-07-03");
    }

    #[test]
    fn test_days_in_year_scales_year_term_only() {
        let cal = calendar();
        let a = resolve_date("FA0002-01-01", &cal, 365).unwrap();
        let b = resolve_date("FA0002-01-01", &cal, 400).unwrap();
        assert_eq!(b.days_since_zero - a.days_since_zero, 2 * 35);
    }

    #[test]
    fn test_huge_year_length_is_an_error() {
        let cal = calendar();
        assert_eq!(
            resolve_date("FA9999-01-01", &cal, 10_000_000_000_000_000),
            Err(DateError::DayCountOverflow)
        );
        // The largest year length that still fits resolves normally
        let max = (i64::MAX - 1) / 9999;
        assert_eq!(
            resolve_date("FA9999-01-01", &cal, max).map(|e| e.days_since_zero),
            Ok(9999 * max + 1)
        );
    }

    #[test]
    fn test_huge_month_lengths_are_an_error() {
        let mut cal = calendar();
        cal.months[0].days = i64::MAX;
        cal.months[1].days = i64::MAX;
        assert_eq!(
            resolve_date("FA0000-03-01", &cal, 365),
            Err(DateError::DayCountOverflow)
        );
        assert_eq!(
            resolve_date("FA0000-02-01", &cal, 365),
            Err(DateError::DayCountOverflow)
        );
        assert_eq!(
            resolve_date("FA0000-01-05", &cal, 365).map(|e| e.days_since_zero),
            Ok(5)
        );
    }
}
