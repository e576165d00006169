//! Fantasy calendar engine
//!
//! This crate holds everything about user-defined calendars that does not
//! touch a terminal or a file:
//! - Calendar model (ages, months, the shared year length)
//! - Field validators for wizard input
//! - Date resolution of `AAYYYY-MM-DD` strings into linear day counts
//! - Calendar generation from wizard input
//! - The calendar/event wizard state machine

#![warn(clippy::all)]

pub mod builder;
pub mod date;
pub mod model;
pub mod validate;
pub mod wizard;

#[cfg(test)]
mod tests;

pub use builder::{DEFAULT_DAYS_IN_YEAR, build_calendar};
pub use date::{DateError, DateStamp, days_since_zero, resolve_date};
pub use model::{Age, Calendar, Configuration, CreateCalendarInput, Event, Month};
pub use validate::{
    FieldError, validate_abbreviation, validate_event_name, validate_name, validate_year,
};
pub use wizard::{
    CalendarStep, EventStep, Outcome, Persistence, Wizard, WizardError, WizardState,
};
