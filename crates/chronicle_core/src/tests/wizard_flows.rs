//! Wizard flow tests
//!
//! Drive the calendar and event flows end to end through `Wizard::submit`
//! with an in-memory store standing in for the data directory.

use crate::date::DateError;
use crate::model::{Calendar, Configuration, Event};
use crate::validate::FieldError;
use crate::wizard::{CalendarStep, EventStep, Outcome, Persistence, Wizard, WizardError, WizardState};

#[derive(Default)]
struct MemoryStore {
    saved: Vec<Configuration>,
    events: Vec<(String, Event)>,
    fail: bool,
}

impl MemoryStore {
    fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }
}

impl Persistence for MemoryStore {
    type Error = String;

    fn save_configuration(&mut self, config: &Configuration) -> Result<(), String> {
        if self.fail {
            return Err("disk full".to_string());
        }
        self.saved.push(config.clone());
        Ok(())
    }

    fn record_event(&mut self, calendar: &Calendar, event: &Event) -> Result<(), String> {
        if self.fail {
            return Err("template missing".to_string());
        }
        self.events.push((calendar.name.clone(), event.clone()));
        Ok(())
    }
}

fn create_calendar(wizard: &mut Wizard, config: &mut Configuration, store: &mut MemoryStore) {
    wizard.start_calendar();
    for field in ["Harptos", "DR", "-700", "2000"] {
        wizard.submit(field, config, store).unwrap();
    }
}

#[test]
fn test_create_calendar_flow() {
    let mut wizard = Wizard::new();
    let mut config = Configuration::default();
    let mut store = MemoryStore::default();

    wizard.start_calendar();
    assert_eq!(
        wizard.submit("  Harptos  ", &mut config, &mut store),
        Ok(Outcome::Advanced)
    );
    assert_eq!(wizard.submit("DR", &mut config, &mut store), Ok(Outcome::Advanced));
    assert_eq!(wizard.submit("-700", &mut config, &mut store), Ok(Outcome::Advanced));

    let outcome = wizard.submit("2000", &mut config, &mut store).unwrap();
    let Outcome::CalendarCreated(calendar) = outcome else {
        panic!("expected a calendar, got {outcome:?}");
    };
    assert_eq!(calendar.name, "Harptos");
    assert_eq!(calendar.start_year, -700);
    assert_eq!(calendar.ages[0].length, 2000);

    assert_eq!(*wizard.state(), WizardState::Idle);
    assert_eq!(config.calendars.len(), 1);
    assert_eq!(config.days_in_year, 365);
    assert_eq!(store.saved.len(), 1);
    assert_eq!(store.saved[0], config);
}

#[test]
fn test_invalid_field_keeps_step_and_config() {
    let mut wizard = Wizard::new();
    let mut config = Configuration::default();
    let mut store = MemoryStore::default();

    wizard.start_calendar();
    assert_eq!(
        wizard.submit("   ", &mut config, &mut store),
        Err(WizardError::Field(FieldError::EmptyInput {
            field: "calendar name"
        }))
    );
    assert_eq!(
        *wizard.state(),
        WizardState::CreateCalendar(CalendarStep::AwaitName)
    );

    wizard.submit("Harptos", &mut config, &mut store).unwrap();
    assert!(wizard.submit("DRXX", &mut config, &mut store).is_err());
    assert_eq!(
        *wizard.state(),
        WizardState::CreateCalendar(CalendarStep::AwaitAbbreviation {
            name: "Harptos".into()
        })
    );

    wizard.submit("DR", &mut config, &mut store).unwrap();
    wizard.submit("1", &mut config, &mut store).unwrap();
    for _ in 0..3 {
        assert!(matches!(
            wizard.submit("many", &mut config, &mut store),
            Err(WizardError::Field(FieldError::NotANumber { .. }))
        ));
    }
    assert!(config.calendars.is_empty());
    assert!(store.saved.is_empty());

    wizard.submit("10", &mut config, &mut store).unwrap();
    assert_eq!(config.calendars.len(), 1);
}

#[test]
fn test_cancel_discards_buffered_fields() {
    let mut wizard = Wizard::new();
    let mut config = Configuration::default();
    let mut store = MemoryStore::default();

    wizard.start_calendar();
    wizard.submit("Harptos", &mut config, &mut store).unwrap();
    wizard.submit("DR", &mut config, &mut store).unwrap();
    wizard.cancel();
    assert!(!wizard.is_active());

    wizard.start_calendar();
    assert_eq!(
        *wizard.state(),
        WizardState::CreateCalendar(CalendarStep::AwaitName)
    );
    assert!(config.calendars.is_empty());
}

#[test]
fn test_submit_while_idle_is_ignored() {
    let mut wizard = Wizard::new();
    let mut config = Configuration::default();
    let mut store = MemoryStore::default();
    assert_eq!(
        wizard.submit("anything", &mut config, &mut store),
        Ok(Outcome::Ignored)
    );
}

#[test]
fn test_event_flow_requires_a_calendar() {
    let mut wizard = Wizard::new();
    let config = Configuration::default();
    assert_eq!(
        wizard.start_event(&config),
        Err(WizardError::NoCalendarsAvailable)
    );
    assert!(!wizard.is_active());
}

#[test]
fn test_create_event_flow() {
    let mut wizard = Wizard::new();
    let mut config = Configuration::default();
    let mut store = MemoryStore::default();
    create_calendar(&mut wizard, &mut config, &mut store);

    wizard.start_event(&config).unwrap();
    assert_eq!(
        *wizard.state(),
        WizardState::CreateEvent(EventStep::SelectCalendar)
    );
    wizard.submit("Harptos", &mut config, &mut store).unwrap();

    assert!(matches!(
        wizard.submit("XY0001-01-01", &mut config, &mut store),
        Err(WizardError::Date(DateError::UnknownAge { .. }))
    ));
    assert_eq!(
        *wizard.state(),
        WizardState::CreateEvent(EventStep::AwaitDate { calendar: 0 })
    );

    wizard.submit("FA0005-01-15", &mut config, &mut store).unwrap();
    assert_eq!(wizard.pending_event().map(|e| e.days_since_zero), Some(1840));

    assert!(wizard.submit("", &mut config, &mut store).is_err());
    assert!(wizard.pending_event().is_some());

    let outcome = wizard
        .submit("Founding of Waterdeep", &mut config, &mut store)
        .unwrap();
    let Outcome::EventCreated(event) = outcome else {
        panic!("expected an event, got {outcome:?}");
    };
    assert_eq!(event.name, "Founding of Waterdeep");
    assert_eq!(event.calendar_abbrev, "DR");

    assert!(!wizard.is_active());
    assert_eq!(store.events.len(), 1);
    assert_eq!(store.events[0].0, "Harptos");
    assert_eq!(store.events[0].1, event);
}

#[test]
fn test_event_uses_selected_calendar() {
    let mut wizard = Wizard::new();
    let mut config = Configuration::default();
    let mut store = MemoryStore::default();
    create_calendar(&mut wizard, &mut config, &mut store);
    wizard.start_calendar();
    for field in ["Dale Reckoning", "DL", "0", "50"] {
        wizard.submit(field, &mut config, &mut store).unwrap();
    }

    wizard.start_event(&config).unwrap();
    wizard.submit("Dale Reckoning", &mut config, &mut store).unwrap();
    wizard.submit("FA0001-12-35", &mut config, &mut store).unwrap();
    wizard.submit("Midwinter", &mut config, &mut store).unwrap();

    let (calendar, event) = &store.events[0];
    assert_eq!(calendar, "Dale Reckoning");
    assert_eq!(event.calendar_abbrev, "DL");
    assert_eq!(event.days_since_zero, 365 + 330 + 35);
}

#[test]
fn test_same_named_calendars_pick_by_index() {
    let mut wizard = Wizard::new();
    let mut config = Configuration::default();
    let mut store = MemoryStore::default();
    create_calendar(&mut wizard, &mut config, &mut store);
    wizard.start_calendar();
    for field in ["Harptos", "DL", "0", "50"] {
        wizard.submit(field, &mut config, &mut store).unwrap();
    }

    wizard.start_event(&config).unwrap();
    wizard.select_calendar(1, &config).unwrap();
    wizard.submit("FA0001-01-01", &mut config, &mut store).unwrap();
    wizard.submit("Coronation", &mut config, &mut store).unwrap();

    assert_eq!(store.events[0].1.calendar_abbrev, "DL");
}

#[test]
fn test_day_count_overflow_keeps_date_step() {
    let mut wizard = Wizard::new();
    let mut config = Configuration::default();
    let mut store = MemoryStore::default();
    create_calendar(&mut wizard, &mut config, &mut store);
    config.days_in_year = i64::MAX;

    wizard.start_event(&config).unwrap();
    wizard.submit("Harptos", &mut config, &mut store).unwrap();
    assert_eq!(
        wizard.submit("FA0002-01-01", &mut config, &mut store),
        Err(WizardError::Date(DateError::DayCountOverflow))
    );
    assert_eq!(
        *wizard.state(),
        WizardState::CreateEvent(EventStep::AwaitDate { calendar: 0 })
    );
}

#[test]
fn test_persistence_failure_returns_to_idle() {
    let mut wizard = Wizard::new();
    let mut config = Configuration::default();
    let mut store = MemoryStore::failing();

    wizard.start_calendar();
    for field in ["Harptos", "DR", "1"] {
        wizard.submit(field, &mut config, &mut store).unwrap();
    }
    assert_eq!(
        wizard.submit("10", &mut config, &mut store),
        Err(WizardError::PersistenceFailed {
            message: "disk full".into()
        })
    );
    assert!(!wizard.is_active());
    // The calendar stays in memory even though it was not stored
    assert_eq!(config.calendars.len(), 1);
}

#[test]
fn test_event_persistence_failure() {
    let mut wizard = Wizard::new();
    let mut config = Configuration::default();
    create_calendar(&mut wizard, &mut config, &mut MemoryStore::default());

    let mut store = MemoryStore::failing();
    wizard.start_event(&config).unwrap();
    wizard.submit("Harptos", &mut config, &mut store).unwrap();
    wizard.submit("FA0001-01-01", &mut config, &mut store).unwrap();
    let err = wizard.submit("Coronation", &mut config, &mut store).unwrap_err();
    assert_eq!(err.to_string(), "template missing");
    assert!(!wizard.is_active());
}
