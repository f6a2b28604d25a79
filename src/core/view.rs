//! # View
//!
//! Pure projection of `App` into the text the terminal shows.
//! The TUI decides colors and layout; the words come from here.

use crate::core::state::{App, Phase};

pub const INPUT_PLACEHOLDER: &str = "Frankfurt";

/// Braille dot spinner shown while a lookup is in flight.
pub const SPINNER_FRAMES: &[&str] = &["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

const HINT_EDITING: &str = "(enter to search, esc to quit)";
const HINT_LOADING: &str = "(esc to quit)";
const HINT_FINISHED: &str = "(type or press enter to search again, esc to quit)";

/// Overall mood of the screen, used for styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Prompt,
    Busy,
    Success,
    Failure,
}

#[derive(Debug, Clone, PartialEq)]
pub struct View {
    pub headline: String,
    /// Field contents, only while editing.
    pub input: Option<String>,
    pub hint: &'static str,
    pub tone: Tone,
}

impl View {
    pub fn of(app: &App) -> Self {
        let city = app.city.as_deref().unwrap_or_default();

        match app.phase {
            Phase::Editing => View {
                headline: String::from("Enter a city and press Enter"),
                input: Some(app.input_text.clone()),
                hint: HINT_EDITING,
                tone: Tone::Prompt,
            },
            Phase::Loading => View {
                headline: format!("Looking up the weather in {city}..."),
                input: None,
                hint: HINT_LOADING,
                tone: Tone::Busy,
            },
            Phase::Done => View {
                headline: match app.temperature {
                    Some(celsius) => {
                        format!("Temperature in {city} is {}", format_celsius(celsius))
                    }
                    None => format!("No temperature for {city}"),
                },
                input: None,
                hint: HINT_FINISHED,
                tone: Tone::Success,
            },
            Phase::Failed => View {
                headline: match &app.error {
                    Some(e) => format!("Error: {e}"),
                    None => String::from("Error"),
                },
                input: None,
                hint: HINT_FINISHED,
                tone: Tone::Failure,
            },
        }
    }

    /// Plain-text rendering, one element per line.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![self.headline.clone()];
        if let Some(input) = &self.input {
            let shown = if input.is_empty() {
                INPUT_PLACEHOLDER
            } else {
                input.as_str()
            };
            lines.push(format!("> {shown}"));
        }
        lines.push(self.hint.to_string());
        lines
    }
}

/// One decimal place, Rust's default rounding.
pub fn format_celsius(celsius: f64) -> String {
    format!("{celsius:.1}°C")
}

pub fn spinner_frame(frame: usize) -> &'static str {
    SPINNER_FRAMES[frame % SPINNER_FRAMES.len()]
}
