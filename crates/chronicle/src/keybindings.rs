//! Keybindings matching utilities.
//!
//! Converts crossterm key events to the string form used in
//! `keybindings.yaml` and checks them against configured bindings.

use std::path::{Path, PathBuf};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub use crate::data::keybindings_data::KeybindingsConfig;

impl KeybindingsConfig {
    /// Convert a KeyEvent to our string format.
    ///
    /// Examples:
    /// - KeyCode::Char('a') with no modifiers -> "a"
    /// - KeyCode::Char('c') with ctrl -> "ctrl+c"
    /// - KeyCode::Char('?') with shift -> "?"
    /// - KeyCode::Esc -> "esc"
    pub fn key_to_string(key: &KeyEvent) -> String {
        let mut parts = Vec::new();

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            parts.push("ctrl");
        }
        if key.modifiers.contains(KeyModifiers::ALT) {
            parts.push("alt");
        }
        let shift = key.modifiers.contains(KeyModifiers::SHIFT);

        let key_str = match key.code {
            // Shift is already folded into punctuation like '?'
            KeyCode::Char(c) if shift && c.is_alphabetic() => {
                parts.push("shift");
                c.to_lowercase().to_string()
            }
            KeyCode::Char(c) => c.to_lowercase().to_string(),
            KeyCode::Enter => "enter".to_string(),
            KeyCode::Esc => "esc".to_string(),
            KeyCode::Tab => "tab".to_string(),
            KeyCode::Backspace => "backspace".to_string(),
            KeyCode::Delete => "delete".to_string(),
            KeyCode::Up => "up".to_string(),
            KeyCode::Down => "down".to_string(),
            KeyCode::Left => "left".to_string(),
            KeyCode::Right => "right".to_string(),
            KeyCode::Home => "home".to_string(),
            KeyCode::End => "end".to_string(),
            KeyCode::F(n) => format!("f{}", n),
            _ => return String::new(),
        };

        parts.push(&key_str);
        parts.join("+")
    }

    /// Check if a KeyEvent matches any of the configured bindings.
    pub fn matches(key: &KeyEvent, bindings: &[String]) -> bool {
        let key_str = Self::key_to_string(key);
        if key_str.is_empty() {
            return false;
        }
        bindings.iter().any(|b| b.eq_ignore_ascii_case(&key_str))
    }

    pub fn path(data_dir: &Path) -> PathBuf {
        data_dir.join("keybindings.yaml")
    }

    /// Load keybindings from file, returning defaults if the file doesn't
    /// exist or fails to parse.
    pub fn load_or_default(data_dir: &Path) -> Self {
        let path = Self::path(data_dir);
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => serde_saphyr::from_str(&content).unwrap_or_else(|e| {
                tracing::warn!(path = %path.display(), error = %e, "Invalid keybindings, using defaults");
                Self::default()
            }),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to read keybindings, using defaults");
                Self::default()
            }
        }
    }

    /// Short "key: action" lines for the help panel.
    pub fn help_lines(&self) -> Vec<(String, &'static str)> {
        let join = |keys: &[String]| keys.join("/");
        vec![
            (join(&self.navigation.up), "move up"),
            (join(&self.navigation.down), "move down"),
            (join(&self.navigation.confirm), "select"),
            (join(&self.global.cancel), "back"),
            (join(&self.global.help), "toggle help"),
            (join(&self.global.quit), "quit"),
            (join(&self.global.force_quit), "force quit"),
        ]
    }
}
