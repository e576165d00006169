//! Common rendering helpers for modal widgets.

use std::rc::Rc;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::centered_rect;

// ========== Cursor Rendering ==========

/// Render a line of text with a visible cursor at the specified character
/// position. The cursor is shown as a white background block.
pub fn render_cursor_line(display_value: &str, cursor_pos: usize, prefix: &str) -> Line<'static> {
    let mut spans = Vec::new();

    if !prefix.is_empty() {
        spans.push(Span::raw(prefix.to_string()));
    }

    let cursor_style = Style::default().bg(Color::White).fg(Color::Black);
    let chars: Vec<char> = display_value.chars().collect();
    for (i, c) in chars.iter().enumerate() {
        if i == cursor_pos {
            spans.push(Span::styled(c.to_string(), cursor_style));
        } else {
            spans.push(Span::raw(c.to_string()));
        }
    }

    if cursor_pos >= chars.len() {
        spans.push(Span::styled(" ", cursor_style));
    }

    Line::from(spans)
}

// ========== Horizontal Scroll ==========

/// The visible part of a text input that is wider than its container.
pub struct ScrolledView {
    pub display_value: String,
    /// Cursor position within `display_value`, in characters
    pub cursor_pos: usize,
}

/// Calculate horizontal scroll for a text input, keeping the cursor centred
/// once the text no longer fits. Works on characters so multibyte input is
/// never split.
pub fn calculate_scroll(value: &str, cursor_pos: usize, max_width: usize) -> ScrolledView {
    let input_width = max_width.saturating_sub(2);
    let chars: Vec<char> = value.chars().collect();

    if chars.len() <= input_width {
        return ScrolledView {
            display_value: value.to_string(),
            cursor_pos,
        };
    }

    let start = cursor_pos.saturating_sub(input_width / 2);
    let end = (start + input_width).min(chars.len());
    let start = end.saturating_sub(input_width);

    ScrolledView {
        display_value: chars[start..end].iter().collect(),
        cursor_pos: cursor_pos - start,
    }
}

// ========== Modal Frame ==========

pub struct ModalFrame {
    /// Layout chunks inside the border
    pub chunks: Rc<[Rect]>,
}

/// Center, clear and border a modal, then split its inside by `constraints`.
pub fn render_modal_frame(
    frame: &mut Frame,
    title: &str,
    width: u16,
    height: u16,
    border_color: Color,
    constraints: &[Constraint],
) -> ModalFrame {
    let modal_area = centered_rect(width, height, frame.area());

    frame.render_widget(Clear, modal_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(format!(" {} ", title));

    let inner = block.inner(modal_area);
    frame.render_widget(block, modal_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    ModalFrame { chunks }
}

// ========== Help Text Builder ==========

/// Builder for a single line of `[key] description` pairs.
///
/// ```ignore
/// let help = HelpText::new()
///     .key("[Enter]", Color::Green, "Confirm")
///     .key("[Esc]", Color::Yellow, "Cancel")
///     .build();
/// ```
pub struct HelpText {
    items: Vec<(String, Color, String)>,
}

impl HelpText {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn key(mut self, key: &str, color: Color, desc: &str) -> Self {
        self.items.push((key.to_string(), color, desc.to_string()));
        self
    }

    pub fn line(self) -> Line<'static> {
        let mut spans: Vec<Span> = Vec::new();
        for (i, (key, color, desc)) in self.items.into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(key, Style::default().fg(color)));
            spans.push(Span::raw(format!(" {}", desc)));
        }
        Line::from(spans)
    }

    pub fn build(self) -> Paragraph<'static> {
        Paragraph::new(self.line())
    }
}

impl Default for HelpText {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_scroll_short_text() {
        let result = calculate_scroll("hello", 3, 20);
        assert_eq!(result.display_value, "hello");
        assert_eq!(result.cursor_pos, 3);
    }

    #[test]
    fn test_calculate_scroll_long_text() {
        let value = "this is a very long text that needs scrolling";
        let result = calculate_scroll(value, 20, 15);
        assert_eq!(result.display_value.chars().count(), 13);
        assert!(result.cursor_pos <= 13);
    }

    #[test]
    fn test_calculate_scroll_multibyte() {
        let value = "ÆØÅ".repeat(10);
        let result = calculate_scroll(&value, 30, 10);
        assert_eq!(result.display_value.chars().count(), 8);
        assert_eq!(result.cursor_pos, 8);
    }

    #[test]
    fn test_render_cursor_line_middle() {
        let line = render_cursor_line("hello", 2, "");
        assert_eq!(line.spans.len(), 5);
    }

    #[test]
    fn test_render_cursor_line_end() {
        let line = render_cursor_line("hi", 2, " ");
        // prefix, h, i, cursor block
        assert_eq!(line.spans.len(), 4);
    }

    #[test]
    fn test_help_text_line() {
        let line = HelpText::new()
            .key("[Enter]", Color::Green, "Confirm")
            .key("[Esc]", Color::Yellow, "Cancel")
            .line();
        let text: String = line.spans.iter().map(|s| s.content.to_string()).collect();
        assert_eq!(text, "[Enter] Confirm  [Esc] Cancel");
    }
}
