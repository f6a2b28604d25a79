//! # InputBox Component
//!
//! Displays the city field while editing.
//!
//! The text itself lives in `App::input_text` and is edited by `core::update`;
//! this component only draws it, shows the placeholder when empty, and parks
//! the terminal cursor after the last character.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::Component;

/// Borders take one row above and one below the text.
pub const INPUT_HEIGHT: u16 = 3;

pub struct InputBox<'a> {
    /// Current field contents (Prop)
    pub text: &'a str,
    /// Shown dimmed while `text` is empty (Prop)
    pub placeholder: &'a str,
}

impl<'a> InputBox<'a> {
    pub fn new(text: &'a str, placeholder: &'a str) -> Self {
        Self { text, placeholder }
    }

    /// Column of the cursor relative to the inner area, clamped to fit.
    fn cursor_offset(&self, inner_width: u16) -> u16 {
        let width = self.text.width().min(u16::MAX as usize) as u16;
        width.min(inner_width.saturating_sub(1))
    }

    /// Text to draw: the tail of the field when it is wider than the box.
    fn visible_text(&self, inner_width: u16) -> &'a str {
        let limit = inner_width.saturating_sub(1) as usize;
        if self.text.width() <= limit {
            return self.text;
        }
        let mut start = 0;
        for (idx, _) in self.text.char_indices() {
            if self.text[idx..].width() <= limit {
                start = idx;
                break;
            }
        }
        &self.text[start..]
    }
}

impl Component for InputBox<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .title("City");
        let inner = block.inner(area);

        let paragraph = if self.text.is_empty() {
            Paragraph::new(self.placeholder).style(Style::default().fg(Color::DarkGray))
        } else {
            Paragraph::new(self.visible_text(inner.width)).style(Style::default().fg(Color::Green))
        };
        frame.render_widget(paragraph.block(block), area);

        if inner.width > 0 && inner.height > 0 {
            let shown = InputBox::new(self.visible_text(inner.width), self.placeholder);
            frame.set_cursor_position((inner.x + shown.cursor_offset(inner.width), inner.y));
        }
    }
}
