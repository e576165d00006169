//! Calendar, Age and Month definitions
//!
//! A calendar is passive data: an ordered list of ages (named spans of
//! years) and an ordered list of months. Back-references between ages or
//! months are plain identifiers resolved by lookup, never ownership.

use std::fmt::Write;

use serde::{Deserialize, Serialize};

/// A named span of years, referenced by its abbreviation in date strings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Age {
    pub name: String,
    pub abbreviation: String,
    /// Length in years
    pub length: i64,
    /// Abbreviation of the age preceding this one
    #[serde(
        default,
        rename = "previous_age",
        skip_serializing_if = "Option::is_none"
    )]
    pub previous: Option<String>,
}

impl Age {
    pub fn new(name: impl Into<String>, abbreviation: impl Into<String>, length: i64) -> Self {
        Self {
            name: name.into(),
            abbreviation: abbreviation.into(),
            length,
            previous: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Month {
    pub name: String,
    pub days: i64,
    /// Name of the month preceding this one
    #[serde(
        default,
        rename = "previous_month",
        skip_serializing_if = "Option::is_none"
    )]
    pub previous: Option<String>,
}

impl Month {
    pub fn new(name: impl Into<String>, days: i64) -> Self {
        Self {
            name: name.into(),
            days,
            previous: None,
        }
    }
}

/// One user-defined fantasy calendar.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Calendar {
    pub name: String,
    pub abbreviation: String,
    pub start_year: i64,
    /// Total years available for ages
    pub total_years: i64,
    #[serde(default)]
    pub ages: Vec<Age>,
    #[serde(default)]
    pub months: Vec<Month>,
}

impl Calendar {
    /// First age whose abbreviation matches exactly (case-sensitive).
    pub fn find_age(&self, abbreviation: &str) -> Option<&Age> {
        self.ages.iter().find(|a| a.abbreviation == abbreviation)
    }

    /// Month by 1-based index.
    pub fn month(&self, number: usize) -> Option<&Month> {
        number.checked_sub(1).and_then(|idx| self.months.get(idx))
    }

    pub fn previous_age(&self, age: &Age) -> Option<&Age> {
        age.previous.as_deref().and_then(|abbrev| self.find_age(abbrev))
    }

    pub fn previous_month(&self, month: &Month) -> Option<&Month> {
        month
            .previous
            .as_deref()
            .and_then(|name| self.months.iter().find(|m| m.name == name))
    }

    /// Sum of the day counts of all months, saturating at the `i64` bounds.
    pub fn days_in_months(&self) -> i64 {
        self.months
            .iter()
            .fold(0i64, |total, m| total.saturating_add(m.days))
    }

    /// True when any month carries a negative day count, which happens when
    /// the calendar was generated with fewer than 330 days in the year.
    pub fn has_negative_months(&self) -> bool {
        self.months.iter().any(|m| m.days < 0)
    }

    /// Multi-line human readable summary of the calendar structure.
    pub fn details(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Calendar: {} ({})", self.name, self.abbreviation);
        let _ = writeln!(
            out,
            "Start Year: {}, Total Years: {}",
            self.start_year, self.total_years
        );

        out.push_str("\nAges:\n");
        for age in &self.ages {
            let _ = write!(out, "- {} ({}): {} years", age.name, age.abbreviation, age.length);
            if let Some(prev) = self.previous_age(age) {
                let _ = write!(out, ", after {}", prev.name);
            }
            out.push('\n');
        }

        out.push_str("\nMonths:\n");
        for month in &self.months {
            let _ = writeln!(out, "- {}: {} days", month.name, month.days);
        }

        out
    }
}

/// Parameters collected by the calendar wizard before the calendar exists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateCalendarInput {
    pub name: String,
    pub abbreviation: String,
    pub start_year: i64,
    pub total_years: i64,
}
