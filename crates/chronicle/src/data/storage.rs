//! Data directory storage
//!
//! Directory structure:
//! ~/.chronicle/
//!   config.yaml            # Shared year length and every calendar
//!   keybindings.yaml       # Optional key binding overrides
//!   chronicle.log
//!   templates/
//!     event.md.tera        # Template for generated event files
//!   events/
//!     founding_of_waterdeep_1840.md

use std::fs;
use std::path::PathBuf;

use chronicle_core::{Calendar, Configuration, Event, Persistence};

use super::event_template::{DEFAULT_EVENT_TEMPLATE, EVENT_TEMPLATE_FILE, render_event};
use super::keybindings_data::KeybindingsConfig;

/// Error types for storage operations
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Serialization error: {0}")]
    Serialize(String),
    #[error("Template error: {0}")]
    Template(String),
}

/// Manages the data directory holding configuration and generated events
#[derive(Debug, Clone)]
pub struct DataDirectory {
    root: PathBuf,
}

impl DataDirectory {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Get the default data directory path (~/.chronicle/)
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".chronicle")
    }

    fn config_path(&self) -> PathBuf {
        self.root.join("config.yaml")
    }

    fn templates_dir(&self) -> PathBuf {
        self.root.join("templates")
    }

    pub fn events_dir(&self) -> PathBuf {
        self.root.join("events")
    }

    pub fn template_path(&self) -> PathBuf {
        self.templates_dir().join(EVENT_TEMPLATE_FILE)
    }

    /// Check if the data directory exists and has been initialized
    pub fn exists(&self) -> bool {
        self.templates_dir().exists() && self.events_dir().exists()
    }

    /// Create the directory tree and write the default event template if
    /// there is none yet. An edited template is never overwritten.
    pub fn ensure_directories(&self) -> Result<(), StorageError> {
        for dir in [self.root.clone(), self.templates_dir(), self.events_dir()] {
            fs::create_dir_all(&dir).map_err(|e| {
                StorageError::Io(format!("Failed to create directory {}: {}", dir.display(), e))
            })?;
        }

        let template_path = self.template_path();
        if !template_path.exists() {
            fs::write(&template_path, DEFAULT_EVENT_TEMPLATE).map_err(|e| {
                StorageError::Io(format!("Failed to create default template: {}", e))
            })?;
            tracing::info!(path = %template_path.display(), "wrote default event template");
        }
        Ok(())
    }

    /// Load config.yaml, or an empty configuration if it does not exist yet
    pub fn load_configuration(&self) -> Result<Configuration, StorageError> {
        let config_path = self.config_path();
        if !config_path.exists() {
            return Ok(Configuration::default());
        }

        let content = fs::read_to_string(&config_path)
            .map_err(|e| StorageError::Io(format!("Failed to read config: {}", e)))?;

        serde_saphyr::from_str(&content)
            .map_err(|e| StorageError::Parse(format!("Failed to parse config: {}", e)))
    }

    /// Overwrite config.yaml with `config`
    pub fn save_configuration(&self, config: &Configuration) -> Result<(), StorageError> {
        let yaml = serde_saphyr::to_string(config)
            .map_err(|e| StorageError::Serialize(format!("Failed to serialize config: {}", e)))?;

        fs::write(self.config_path(), yaml)
            .map_err(|e| StorageError::Io(format!("Failed to write config: {}", e)))
    }

    /// Render the event template for `event` into the events directory.
    /// Returns the path of the written file.
    pub fn write_event(&self, calendar: &Calendar, event: &Event) -> Result<PathBuf, StorageError> {
        let template = fs::read_to_string(self.template_path())
            .map_err(|e| StorageError::Template(format!("Failed to load template: {}", e)))?;

        let content = render_event(&template, event)
            .map_err(|e| StorageError::Template(format!("Failed to render event: {}", e)))?;

        let path = self.events_dir().join(event_file_name(event));
        fs::write(&path, content)
            .map_err(|e| StorageError::Io(format!("Failed to write event file: {}", e)))?;

        tracing::debug!(
            calendar = %calendar.name,
            path = %path.display(),
            "event file written"
        );
        Ok(path)
    }

    pub fn load_keybindings(&self) -> KeybindingsConfig {
        KeybindingsConfig::load_or_default(&self.root)
    }
}

impl Persistence for DataDirectory {
    type Error = StorageError;

    fn save_configuration(&mut self, config: &Configuration) -> Result<(), StorageError> {
        DataDirectory::save_configuration(self, config)
    }

    fn record_event(&mut self, calendar: &Calendar, event: &Event) -> Result<(), StorageError> {
        self.write_event(calendar, event).map(|_| ())
    }
}

/// `<safe name>_<days since zero>.md`
pub fn event_file_name(event: &Event) -> String {
    let safe_name = sanitize_filename(&event.name.to_lowercase().replace(' ', "_"));
    format!("{}_{}.md", safe_name, event.days_since_zero)
}

fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}
