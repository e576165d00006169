use std::io;
use std::path::PathBuf;

use chronicle_core::{Outcome, WizardError, WizardState};
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::components::{Component, EventResult, main_menu::MainMenu, status_bar::StatusBar};
use crate::data::storage::DataDirectory;
use crate::keybindings::KeybindingsConfig;
use crate::modals::{ModalResult, handle_modal_key, render_modal};
use crate::state::{AppState, MessageModal, ModalAction, ModalState};

pub struct App {
    state: AppState,
    main_menu: MainMenu,
    status_bar: StatusBar,
}

impl App {
    /// Create app with a data directory path.
    ///
    /// A configuration that cannot be read is reported in the status bar and
    /// the app starts with an empty one.
    pub fn with_data_dir(data_dir: PathBuf) -> Self {
        let state = match AppState::load_from_data_dir(data_dir.clone()) {
            Ok(state) => state,
            Err(e) => {
                tracing::warn!(data_dir = %data_dir.display(), error = %e, "failed to load data directory");
                let storage = DataDirectory::new(data_dir);
                let mut state = AppState::new(storage.clone());
                state.keybindings = storage.load_keybindings();
                state.set_error("Starting with an empty configuration.");
                state.modal = ModalState::Message(MessageModal::error(
                    "Configuration Error",
                    &format!("{}\n\nNew calendars will overwrite config.yaml.", e),
                ));
                state
            }
        };

        Self {
            state,
            main_menu: MainMenu::new(),
            status_bar: StatusBar::new(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// runs the application's main loop until the user quits
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        while !self.state.exit {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
        }
        Ok(())
    }

    fn draw(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),    // Menu and side panel
                Constraint::Length(3), // Status bar
            ])
            .split(frame.area());

        self.main_menu.render(frame, chunks[0], &self.state);
        self.status_bar.render(frame, chunks[1], &self.state);

        render_modal(frame, &self.state);
    }

    fn handle_events(&mut self) -> io::Result<()> {
        match event::read()? {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event)
            }
            _ => {}
        };
        Ok(())
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        let global = &self.state.keybindings.global;
        let force_quit = KeybindingsConfig::matches(&key, &global.force_quit);
        let cancel = KeybindingsConfig::matches(&key, &global.cancel);
        let help = KeybindingsConfig::matches(&key, &global.help);
        let quit = KeybindingsConfig::matches(&key, &global.quit);

        if force_quit {
            self.state.exit = true;
            return;
        }

        // Text modals own every other key so `q` and `?` can be typed
        if !self.state.modal.is_none() {
            if cancel {
                self.state.cancel_wizard();
                return;
            }
            match handle_modal_key(key, &mut self.state) {
                ModalResult::Confirmed(_, value) => self.submit_wizard(&value),
                ModalResult::Picked(action, index) => self.handle_pick(action, index),
                ModalResult::Cancelled => self.state.cancel_wizard(),
                ModalResult::Continue => {}
            }
            return;
        }

        if cancel {
            self.state.clear_status();
            return;
        }
        if help {
            self.state.show_help = !self.state.show_help;
            return;
        }
        if quit {
            self.state.exit = true;
            return;
        }

        if self.main_menu.handle_key(key, &mut self.state) == EventResult::Exit {
            self.state.exit = true;
        }
    }

    fn handle_pick(&mut self, action: ModalAction, index: usize) {
        match action {
            ModalAction::SelectEventCalendar => {
                let AppState { wizard, config, .. } = &mut self.state;
                match wizard.select_calendar(index, config) {
                    Ok(_) => {
                        self.state.clear_status();
                        self.state.open_wizard_step();
                    }
                    Err(e) => {
                        self.state.set_error(e.to_string());
                        self.state.cancel_wizard();
                    }
                }
            }
            ModalAction::ViewCalendar => match self.state.config.calendar(index) {
                Some(calendar) => {
                    self.state.modal =
                        ModalState::Message(MessageModal::info(&calendar.name, &calendar.details()));
                }
                None => {
                    self.state.set_error(format!("Calendar {} not found", index));
                    self.state.modal = ModalState::None;
                }
            },
            ModalAction::WizardField => self.state.modal = ModalState::None,
        }
    }

    fn submit_wizard(&mut self, value: &str) {
        let creating_event = matches!(self.state.wizard.state(), WizardState::CreateEvent(_));

        let AppState {
            wizard,
            config,
            storage,
            ..
        } = &mut self.state;

        match wizard.submit(value, config, storage) {
            Ok(Outcome::Ignored) => self.state.modal = ModalState::None,
            Ok(Outcome::Advanced) => {
                if let Some(event) = self.state.wizard.pending_event() {
                    let message = format!(
                        "Event date: {} (Days since 0: {})",
                        event.stamp(),
                        event.days_since_zero
                    );
                    self.state.set_info(message);
                } else {
                    self.state.clear_status();
                }
                self.state.open_wizard_step();
            }
            Ok(Outcome::CalendarCreated(_)) => {
                self.state.set_info("Calendar created successfully!");
                self.state.modal = ModalState::None;
            }
            Ok(Outcome::EventCreated(event)) => {
                self.state
                    .set_info(format!("Event '{}' created successfully!", event.name));
                self.state.modal = ModalState::None;
            }
            Err(WizardError::PersistenceFailed { message }) => {
                let what = if creating_event { "event" } else { "calendar" };
                self.state
                    .set_error(format!("Failed to create {}: {}", what, message));
                self.state.modal = ModalState::None;
            }
            // Validation failures keep the step and its modal for a retry
            Err(e) => self.state.set_error(e.to_string()),
        }
    }
}
