use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::{Component, EventResult};
use crate::state::AppState;
use crate::util::styles::{HELP_COLOR, status_color};

pub struct StatusBar;

impl StatusBar {
    pub fn new() -> Self {
        Self
    }

    fn help_text(state: &AppState) -> String {
        let global = &state.keybindings.global;
        if state.wizard.is_active() {
            format!("{}: cancel | {}: quit", global.cancel.join("/"), global.force_quit.join("/"))
        } else {
            format!(
                "j/k: navigate | enter: select | {}: help | {}: quit",
                global.help.join("/"),
                global.quit.join("/")
            )
        }
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for StatusBar {
    fn handle_key(&mut self, _key: KeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let mut lines = Vec::with_capacity(2);
        if let Some(status) = &state.status {
            lines.push(Line::from(Span::styled(
                status.text.clone(),
                Style::default().fg(status_color(status.is_error)),
            )));
        }
        lines.push(Line::from(Span::styled(
            Self::help_text(state),
            Style::default().fg(HELP_COLOR),
        )));

        let paragraph = Paragraph::new(lines).block(Block::default().borders(Borders::TOP));
        frame.render_widget(paragraph, area);
    }
}
