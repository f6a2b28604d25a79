//! # Headline Component
//!
//! The main line of the screen: the prompt, the loading message, the
//! temperature or the error. Color follows the view's `Tone`.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::core::view::{Tone, View};
use crate::tui::component::Component;

pub struct Headline<'a> {
    pub view: &'a View,
    /// Current spinner glyph, drawn before the text while busy.
    pub spinner: &'a str,
}

fn tone_style(tone: Tone) -> Style {
    match tone {
        Tone::Prompt => Style::default(),
        Tone::Busy => Style::default().fg(Color::Cyan),
        Tone::Success => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        Tone::Failure => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    }
}

impl Component for Headline<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = tone_style(self.view.tone);
        let mut spans = Vec::with_capacity(2);
        if self.view.tone == Tone::Busy {
            spans.push(Span::styled(format!("{} ", self.spinner), style));
        }
        spans.push(Span::styled(self.view.headline.as_str(), style));

        let paragraph = Paragraph::new(Line::from(spans)).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }
}
