use std::path::PathBuf;

use chronicle_core::{Configuration, EventStep, Wizard, WizardState};

use crate::data::keybindings_data::KeybindingsConfig;
use crate::data::storage::{DataDirectory, StorageError};

use super::modal::{ModalAction, ModalState, PickerModal, TextInputModal};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    CreateCalendar,
    CreateEvent,
    ViewCalendars,
    Exit,
}

impl MenuItem {
    pub const ALL: [MenuItem; 4] = [
        MenuItem::CreateCalendar,
        MenuItem::CreateEvent,
        MenuItem::ViewCalendars,
        MenuItem::Exit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MenuItem::CreateCalendar => "Create Calendar",
            MenuItem::CreateEvent => "Create Event",
            MenuItem::ViewCalendars => "View Calendars",
            MenuItem::Exit => "Exit",
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// One line of feedback shown in the status bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

#[derive(Debug)]
pub struct AppState {
    pub config: Configuration,
    pub wizard: Wizard,
    pub modal: ModalState,
    pub menu_index: usize,
    pub status: Option<StatusMessage>,
    pub show_help: bool,
    pub keybindings: KeybindingsConfig,
    pub storage: DataDirectory,
    pub exit: bool,
}

impl AppState {
    pub fn new(storage: DataDirectory) -> Self {
        Self {
            config: Configuration::default(),
            wizard: Wizard::new(),
            modal: ModalState::None,
            menu_index: 0,
            status: None,
            show_help: false,
            keybindings: KeybindingsConfig::default(),
            storage,
            exit: false,
        }
    }

    /// Prepare the data directory and load the configuration and keybindings
    /// stored in it.
    pub fn load_from_data_dir(data_dir: PathBuf) -> Result<Self, StorageError> {
        let storage = DataDirectory::new(data_dir);
        storage.ensure_directories()?;

        let config = storage.load_configuration()?;
        let keybindings = storage.load_keybindings();

        let mut state = Self::new(storage);
        if config.is_empty() {
            state.set_info("No existing configuration found. Starting fresh.");
        } else {
            tracing::info!(calendars = config.calendars.len(), "configuration loaded");
            state.set_info("Configuration loaded successfully.");
        }
        state.config = config;
        state.keybindings = keybindings;
        Ok(state)
    }

    pub fn selected_menu_item(&self) -> Option<MenuItem> {
        MenuItem::from_index(self.menu_index)
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: message.into(),
            is_error: true,
        });
    }

    pub fn set_info(&mut self, message: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: message.into(),
            is_error: false,
        });
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }

    /// Show the modal for the wizard's current step, or close the modal once
    /// the wizard is idle again.
    pub fn open_wizard_step(&mut self) {
        let (Some(title), Some(prompt)) = (self.wizard.title(), self.wizard.prompt()) else {
            self.modal = ModalState::None;
            return;
        };

        self.modal = match self.wizard.state() {
            WizardState::CreateEvent(EventStep::SelectCalendar) => ModalState::Picker(
                PickerModal::new(title, self.config.calendar_names(), ModalAction::SelectEventCalendar),
            ),
            _ => ModalState::TextInput(TextInputModal::new(
                title,
                prompt,
                "",
                ModalAction::WizardField,
            )),
        };
    }

    /// Abandon any running wizard and close whatever modal is open.
    pub fn cancel_wizard(&mut self) {
        self.wizard.cancel();
        self.modal = ModalState::None;
    }
}
