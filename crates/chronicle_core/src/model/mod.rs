mod calendar;
mod config;
mod event;

pub use calendar::{Age, Calendar, CreateCalendarInput, Month};
pub use config::Configuration;
pub use event::Event;
