//! Terminal front end for the Chronicle fantasy calendar engine
//!
//! Wraps `chronicle_core` in a ratatui application:
//! - A main menu for creating calendars and events and viewing calendars
//! - Modal text inputs and pickers driven by the core wizard
//! - YAML storage of the configuration under `~/.chronicle/`
//! - Markdown event files rendered from an editable tera template

pub mod app;
pub mod components;
pub mod data;
pub mod keybindings;
pub mod logging;
pub mod modals;
pub mod state;
pub mod util;

pub use app::App;
pub use logging::init_logging;
