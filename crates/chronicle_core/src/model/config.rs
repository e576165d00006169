//! Top-level configuration: the shared year length and every calendar

use serde::{Deserialize, Serialize};

use super::{Calendar, CreateCalendarInput};
use crate::builder::build_calendar;

/// All calendars plus the year length they share.
///
/// `days_in_year == 0` means no calendar has been created yet. The first
/// call to [`Configuration::add_calendar`] fixes it for every calendar that
/// follows.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Configuration {
    #[serde(default)]
    pub days_in_year: i64,
    #[serde(default)]
    pub calendars: Vec<Calendar>,
}

impl Configuration {
    /// Build a calendar from wizard input and append it.
    pub fn add_calendar(&mut self, input: CreateCalendarInput) -> &Calendar {
        let (calendar, effective_days) = build_calendar(input, self.days_in_year);

        if self.days_in_year != effective_days {
            tracing::debug!(
                days_in_year = effective_days,
                "initialized shared year length"
            );
        }
        if calendar.has_negative_months() {
            tracing::warn!(
                calendar = %calendar.name,
                days_in_year = effective_days,
                "generated calendar has a month with a negative day count"
            );
        }

        self.days_in_year = effective_days;
        self.calendars.push(calendar);
        &self.calendars[self.calendars.len() - 1]
    }

    pub fn is_empty(&self) -> bool {
        self.calendars.is_empty()
    }

    pub fn calendar(&self, index: usize) -> Option<&Calendar> {
        self.calendars.get(index)
    }

    pub fn calendar_names(&self) -> Vec<String> {
        self.calendars.iter().map(|c| c.name.clone()).collect()
    }
}
