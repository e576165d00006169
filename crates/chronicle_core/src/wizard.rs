//! Multi-step wizard flows for creating calendars and events.
//!
//! Each step is its own variant and carries exactly the values collected so
//! far, so a step can never hold data that belongs to a later one.
//!
//! Create Calendar:
//!   AwaitName → AwaitAbbreviation → AwaitStartYear → AwaitTotalYears → Idle
//!
//! Create Event:
//!   SelectCalendar → AwaitDate → AwaitName → Idle
//!
//! A failed submit leaves the step untouched. Cancel returns to `Idle` from
//! anywhere and drops everything collected. There is no stepping back.

use std::fmt;

use crate::date::{DateError, resolve_date};
use crate::model::{Calendar, Configuration, CreateCalendarInput, Event};
use crate::validate::{
    FieldError, parse_year, validate_abbreviation, validate_event_name, validate_name,
};

/// Outbound collaborator that stores whatever a finished flow produced.
pub trait Persistence {
    type Error: fmt::Display;

    /// Called after a calendar has been appended to `config`.
    fn save_configuration(&mut self, config: &Configuration) -> Result<(), Self::Error>;

    /// Called with a fully named event and the calendar it belongs to.
    fn record_event(&mut self, calendar: &Calendar, event: &Event) -> Result<(), Self::Error>;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WizardError {
    #[error(transparent)]
    Field(#[from] FieldError),

    #[error(transparent)]
    Date(#[from] DateError),

    #[error("No calendars available. Create a calendar first.")]
    NoCalendarsAvailable,

    #[error("calendar '{name}' not found")]
    UnknownCalendar { name: String },

    #[error("calendar #{index} no longer exists")]
    CalendarNotFound { index: usize },

    #[error("{message}")]
    PersistenceFailed { message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarStep {
    AwaitName,
    AwaitAbbreviation {
        name: String,
    },
    AwaitStartYear {
        name: String,
        abbreviation: String,
    },
    AwaitTotalYears {
        name: String,
        abbreviation: String,
        start_year: i64,
    },
}

impl CalendarStep {
    pub fn title(&self) -> &'static str {
        match self {
            CalendarStep::AwaitName => "Create Calendar - Name",
            CalendarStep::AwaitAbbreviation { .. } => "Create Calendar - Abbreviation",
            CalendarStep::AwaitStartYear { .. } => "Create Calendar - Start Year",
            CalendarStep::AwaitTotalYears { .. } => "Create Calendar - Total Years",
        }
    }

    pub fn prompt(&self) -> &'static str {
        match self {
            CalendarStep::AwaitName => "Enter calendar name",
            CalendarStep::AwaitAbbreviation { .. } => "Enter abbreviation (1-3 chars)",
            CalendarStep::AwaitStartYear { .. } => "Enter start year (number)",
            CalendarStep::AwaitTotalYears { .. } => "Enter total years (number)",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventStep {
    SelectCalendar,
    AwaitDate {
        /// Index into `Configuration::calendars`
        calendar: usize,
    },
    AwaitName {
        calendar: usize,
        event: Event,
    },
}

impl EventStep {
    pub fn title(&self) -> &'static str {
        match self {
            EventStep::SelectCalendar => "Select Calendar",
            EventStep::AwaitDate { .. } => "Create Event - Enter Date",
            EventStep::AwaitName { .. } => "Create Event - Enter Name",
        }
    }

    pub fn prompt(&self) -> &'static str {
        match self {
            EventStep::SelectCalendar => "Choose the calendar for this event",
            EventStep::AwaitDate { .. } => "Format: AAYYYY-MM-DD (e.g., FA0001-01-01)",
            EventStep::AwaitName { .. } => "Enter event name",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum WizardState {
    #[default]
    Idle,
    CreateCalendar(CalendarStep),
    CreateEvent(EventStep),
}

/// Result of one calendar step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarTransition {
    Next(CalendarStep),
    Complete(CreateCalendarInput),
}

/// Result of one event step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventTransition {
    Next(EventStep),
    Complete { calendar: usize, event: Event },
}

/// Validate `input` for `step` and compute what follows it.
pub fn advance_calendar(step: &CalendarStep, input: &str) -> Result<CalendarTransition, FieldError> {
    let next = match step {
        CalendarStep::AwaitName => {
            validate_name(input)?;
            CalendarStep::AwaitAbbreviation {
                name: input.to_string(),
            }
        }
        CalendarStep::AwaitAbbreviation { name } => {
            validate_abbreviation(input)?;
            CalendarStep::AwaitStartYear {
                name: name.clone(),
                abbreviation: input.to_string(),
            }
        }
        CalendarStep::AwaitStartYear { name, abbreviation } => {
            let start_year = parse_year(input, "start year")?;
            CalendarStep::AwaitTotalYears {
                name: name.clone(),
                abbreviation: abbreviation.clone(),
                start_year,
            }
        }
        CalendarStep::AwaitTotalYears {
            name,
            abbreviation,
            start_year,
        } => {
            let total_years = parse_year(input, "total years")?;
            return Ok(CalendarTransition::Complete(CreateCalendarInput {
                name: name.clone(),
                abbreviation: abbreviation.clone(),
                start_year: *start_year,
                total_years,
            }));
        }
    };
    Ok(CalendarTransition::Next(next))
}

/// Validate `input` for `step` against `config` and compute what follows.
///
/// At `SelectCalendar` the input is the chosen calendar's name; the first
/// calendar with that name is used.
pub fn advance_event(
    step: &EventStep,
    input: &str,
    config: &Configuration,
) -> Result<EventTransition, WizardError> {
    match step {
        EventStep::SelectCalendar => {
            let calendar = config
                .calendars
                .iter()
                .position(|c| c.name == input)
                .ok_or_else(|| WizardError::UnknownCalendar {
                    name: input.to_string(),
                })?;
            Ok(EventTransition::Next(EventStep::AwaitDate { calendar }))
        }
        EventStep::AwaitDate { calendar } => {
            let cal = config
                .calendar(*calendar)
                .ok_or(WizardError::CalendarNotFound { index: *calendar })?;
            let event = resolve_date(input, cal, config.days_in_year)?;
            Ok(EventTransition::Next(EventStep::AwaitName {
                calendar: *calendar,
                event,
            }))
        }
        EventStep::AwaitName { calendar, event } => {
            validate_event_name(input)?;
            let mut event = event.clone();
            event.name = input.to_string();
            Ok(EventTransition::Complete {
                calendar: *calendar,
                event,
            })
        }
    }
}

/// What a successful submit did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// No flow is running
    Ignored,
    /// Moved on to the next step
    Advanced,
    CalendarCreated(Calendar),
    EventCreated(Event),
}

enum Transition {
    Calendar(CalendarTransition),
    Event(EventTransition),
}

/// Drives the calendar and event flows one submitted field at a time.
#[derive(Debug, Default)]
pub struct Wizard {
    state: WizardState,
}

impl Wizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn is_active(&self) -> bool {
        self.state != WizardState::Idle
    }

    /// Begin the calendar flow, dropping any flow in progress.
    pub fn start_calendar(&mut self) {
        self.state = WizardState::CreateCalendar(CalendarStep::AwaitName);
    }

    /// Begin the event flow. Refused while no calendar exists.
    pub fn start_event(&mut self, config: &Configuration) -> Result<(), WizardError> {
        if config.is_empty() {
            return Err(WizardError::NoCalendarsAvailable);
        }
        self.state = WizardState::CreateEvent(EventStep::SelectCalendar);
        Ok(())
    }

    /// Choose the event's calendar by its index in `config.calendars`.
    ///
    /// Only acts at `SelectCalendar`. Unlike submitting a name, this picks
    /// the exact calendar even when several share a name.
    pub fn select_calendar(
        &mut self,
        index: usize,
        config: &Configuration,
    ) -> Result<Outcome, WizardError> {
        if self.state != WizardState::CreateEvent(EventStep::SelectCalendar) {
            return Ok(Outcome::Ignored);
        }
        if config.calendar(index).is_none() {
            return Err(WizardError::CalendarNotFound { index });
        }
        self.state = WizardState::CreateEvent(EventStep::AwaitDate { calendar: index });
        Ok(Outcome::Advanced)
    }

    pub fn cancel(&mut self) {
        if self.is_active() {
            tracing::debug!(state = ?self.state, "wizard cancelled");
        }
        self.state = WizardState::Idle;
    }

    pub fn title(&self) -> Option<&'static str> {
        match &self.state {
            WizardState::Idle => None,
            WizardState::CreateCalendar(step) => Some(step.title()),
            WizardState::CreateEvent(step) => Some(step.title()),
        }
    }

    pub fn prompt(&self) -> Option<&'static str> {
        match &self.state {
            WizardState::Idle => None,
            WizardState::CreateCalendar(step) => Some(step.prompt()),
            WizardState::CreateEvent(step) => Some(step.prompt()),
        }
    }

    /// The resolved but still unnamed event, while waiting for its name.
    pub fn pending_event(&self) -> Option<&Event> {
        match &self.state {
            WizardState::CreateEvent(EventStep::AwaitName { event, .. }) => Some(event),
            _ => None,
        }
    }

    /// Submit the current field.
    ///
    /// On any validation error the state is unchanged. A persistence failure
    /// is reported after the flow has already returned to `Idle`; a new
    /// calendar stays in `config` even when saving it failed.
    pub fn submit<P: Persistence>(
        &mut self,
        raw: &str,
        config: &mut Configuration,
        store: &mut P,
    ) -> Result<Outcome, WizardError> {
        let raw = raw.trim();

        let transition = match &self.state {
            WizardState::Idle => return Ok(Outcome::Ignored),
            WizardState::CreateCalendar(step) => Transition::Calendar(advance_calendar(step, raw)?),
            WizardState::CreateEvent(step) => Transition::Event(advance_event(step, raw, config)?),
        };

        match transition {
            Transition::Calendar(CalendarTransition::Next(next)) => {
                self.state = WizardState::CreateCalendar(next);
                Ok(Outcome::Advanced)
            }
            Transition::Event(EventTransition::Next(next)) => {
                self.state = WizardState::CreateEvent(next);
                Ok(Outcome::Advanced)
            }
            Transition::Calendar(CalendarTransition::Complete(input)) => {
                let calendar = config.add_calendar(input).clone();
                tracing::info!(
                    calendar = %calendar.name,
                    abbreviation = %calendar.abbreviation,
                    "calendar created"
                );

                let saved = store.save_configuration(config);
                self.state = WizardState::Idle;
                saved.map_err(persistence_failed)?;
                Ok(Outcome::CalendarCreated(calendar))
            }
            Transition::Event(EventTransition::Complete { calendar, event }) => {
                let cal = config
                    .calendar(calendar)
                    .ok_or(WizardError::CalendarNotFound { index: calendar })?;
                tracing::info!(
                    event = %event.name,
                    calendar = %cal.name,
                    days_since_zero = event.days_since_zero,
                    "event created"
                );

                let recorded = store.record_event(cal, &event);
                self.state = WizardState::Idle;
                recorded.map_err(persistence_failed)?;
                Ok(Outcome::EventCreated(event))
            }
        }
    }
}

fn persistence_failed(err: impl fmt::Display) -> WizardError {
    tracing::error!(error = %err, "persistence failed");
    WizardError::PersistenceFailed {
        message: err.to_string(),
    }
}
