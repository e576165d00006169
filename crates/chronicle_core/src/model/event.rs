//! Dated events recorded against a calendar

use serde::{Deserialize, Serialize};

use crate::date::DateStamp;

/// An event resolved against one calendar.
///
/// Calendar name and abbreviation are copied at creation time, so later
/// changes to the calendar never alter events that already exist.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Event {
    pub calendar_name: String,
    pub calendar_abbrev: String,
    pub age_abbrev: String,
    pub year: i64,
    /// 1-based index into the calendar's months
    pub month: usize,
    /// 1-based day of the month
    pub day: i64,
    pub days_since_zero: i64,
    pub name: String,
}

impl Event {
    /// The event's date in canonical `AAYYYY-MM-DD` form.
    pub fn stamp(&self) -> DateStamp {
        DateStamp {
            age: self.age_abbrev.clone(),
            year: self.year,
            month: self.month,
            day: self.day,
        }
    }
}
