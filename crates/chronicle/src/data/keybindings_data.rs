//! Keybindings configuration data structures.
//!
//! Defines the structure for customizable keyboard shortcuts that can be
//! serialized to/from `~/.chronicle/keybindings.yaml`.

use serde::{Deserialize, Serialize};

/// Root keybindings configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KeybindingsConfig {
    /// Global keybindings (work everywhere)
    pub global: GlobalBindings,
    /// Menu and picker navigation
    pub navigation: NavigationBindings,
}

/// Global keybindings that work everywhere in the app.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalBindings {
    /// Quit from the main menu
    pub quit: Vec<String>,
    /// Quit from anywhere, even mid-wizard
    pub force_quit: Vec<String>,
    pub help: Vec<String>,
    /// Abandon the running wizard or close a modal
    pub cancel: Vec<String>,
}

impl Default for GlobalBindings {
    fn default() -> Self {
        Self {
            quit: vec!["q".into()],
            force_quit: vec!["ctrl+c".into()],
            help: vec!["?".into()],
            cancel: vec!["esc".into()],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationBindings {
    pub up: Vec<String>,
    pub down: Vec<String>,
    pub confirm: Vec<String>,
}

impl Default for NavigationBindings {
    fn default() -> Self {
        Self {
            up: vec!["k".into(), "up".into()],
            down: vec!["j".into(), "down".into()],
            confirm: vec!["enter".into()],
        }
    }
}
