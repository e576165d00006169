use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
};

use super::lists::handle_list_navigation;
use super::{Component, EventResult};
use crate::keybindings::KeybindingsConfig;
use crate::state::{AppState, MenuItem, ModalAction, ModalState, PickerModal};
use crate::util::styles::{FOCUS_COLOR, HEADER_COLOR, HELP_COLOR, focused_block};

pub struct MainMenu;

impl MainMenu {
    pub fn new() -> Self {
        Self
    }

    /// Run the action behind a menu entry.
    pub fn activate(item: MenuItem, state: &mut AppState) -> EventResult {
        match item {
            MenuItem::CreateCalendar => {
                state.clear_status();
                state.wizard.start_calendar();
                state.open_wizard_step();
            }
            MenuItem::CreateEvent => match state.wizard.start_event(&state.config) {
                Ok(()) => {
                    state.clear_status();
                    state.open_wizard_step();
                }
                Err(e) => state.set_error(e.to_string()),
            },
            MenuItem::ViewCalendars => {
                if state.config.is_empty() {
                    state.set_error("No calendars to view.");
                } else {
                    state.modal = ModalState::Picker(PickerModal::new(
                        "View Calendars",
                        state.config.calendar_names(),
                        ModalAction::ViewCalendar,
                    ));
                }
            }
            MenuItem::Exit => return EventResult::Exit,
        }
        EventResult::Handled
    }

    fn render_menu(frame: &mut Frame, area: Rect, state: &AppState) {
        let items: Vec<ListItem> = MenuItem::ALL
            .iter()
            .enumerate()
            .map(|(idx, item)| {
                if idx == state.menu_index {
                    ListItem::new(Line::from(Span::styled(
                        format!("> {}", item.label()),
                        Style::default()
                            .fg(FOCUS_COLOR)
                            .add_modifier(Modifier::BOLD),
                    )))
                } else {
                    ListItem::new(format!("  {}", item.label()))
                }
            })
            .collect();

        frame.render_widget(List::new(items).block(focused_block(" Chronicle ", true)), area);
    }

    fn render_calendars(frame: &mut Frame, area: Rect, state: &AppState) {
        let mut lines = vec![Line::from(Span::styled(
            format!("Days in year: {}", state.config.days_in_year),
            Style::default().fg(HEADER_COLOR),
        ))];
        if state.config.is_empty() {
            lines.push(Line::from(Span::styled(
                "No calendars yet",
                Style::default().fg(HELP_COLOR),
            )));
        }
        for calendar in &state.config.calendars {
            lines.push(Line::from(format!(
                "{} ({}), {} age(s), {} month(s)",
                calendar.name,
                calendar.abbreviation,
                calendar.ages.len(),
                calendar.months.len()
            )));
        }

        frame.render_widget(
            Paragraph::new(lines).block(focused_block(" Calendars ", false)),
            area,
        );
    }

    fn render_help(frame: &mut Frame, area: Rect, state: &AppState) {
        let lines: Vec<Line> = state
            .keybindings
            .help_lines()
            .into_iter()
            .map(|(keys, action)| {
                Line::from(vec![
                    Span::styled(format!("{:<14}", keys), Style::default().fg(HEADER_COLOR)),
                    Span::raw(action),
                ])
            })
            .collect();

        frame.render_widget(Paragraph::new(lines).block(focused_block(" Help ", false)), area);
    }
}

impl Default for MainMenu {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for MainMenu {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        let navigation = &state.keybindings.navigation;
        if handle_list_navigation(&key, &mut state.menu_index, MenuItem::ALL.len(), navigation) {
            return EventResult::Handled;
        }

        if KeybindingsConfig::matches(&key, &state.keybindings.navigation.confirm) {
            return match state.selected_menu_item() {
                Some(item) => Self::activate(item, state),
                None => EventResult::NotHandled,
            };
        }

        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(28), Constraint::Min(0)])
            .split(area);

        Self::render_menu(frame, chunks[0], state);
        if state.show_help {
            Self::render_help(frame, chunks[1], state);
        } else {
            Self::render_calendars(frame, chunks[1], state);
        }
    }
}
