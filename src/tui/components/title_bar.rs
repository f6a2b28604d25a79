//! # TitleBar Component
//!
//! Top status bar showing the provider and the current status.
//!
//! TitleBar is purely presentational: it receives all data as props and has no
//! internal state.
//!
//! ## Conditional Formatting
//!
//! 1. **No API key**: `"Nimbus (openweather) | Ready | no API key"`
//! 2. **Status message**: `"Nimbus (openweather) | Looking up..."`
//! 3. **Default**: `"Nimbus (openweather)"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

/// Top status bar component.
///
/// # Props
///
/// - `provider_name`: The weather provider (e.g., "openweather")
/// - `status_message`: Transient status (e.g., "Ready", "Lookup failed")
/// - `has_credential`: Whether an API key is configured
pub struct TitleBar {
    pub provider_name: String,
    pub status_message: String,
    pub has_credential: bool,
}

impl TitleBar {
    pub fn new(provider_name: String, status_message: String, has_credential: bool) -> Self {
        Self {
            provider_name,
            status_message,
            has_credential,
        }
    }

    fn title_text(&self) -> String {
        if self.status_message.is_empty() {
            format!("Nimbus ({})", self.provider_name)
        } else {
            format!("Nimbus ({}) | {}", self.provider_name, self.status_message)
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![Span::styled(
            self.title_text(),
            Style::default().add_modifier(Modifier::BOLD),
        )];
        if !self.has_credential {
            spans.push(Span::styled(
                " | no API key",
                Style::default().fg(Color::Yellow),
            ));
        }

        frame.render_widget(Line::from(spans), area);
    }
}
