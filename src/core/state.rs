//! # Application State
//!
//! Everything the session knows, in one place.
//!
//! ```text
//! App
//! ├── provider: Arc<dyn WeatherProvider>  // resolver used for lookups
//! ├── input_text: String                   // text field contents
//! ├── city: Option<String>                 // city of the current/last lookup
//! ├── temperature: Option<f64>             // set only in Phase::Done
//! ├── error: Option<WeatherError>          // set only in Phase::Failed
//! ├── phase: Phase                         // where the state machine is
//! └── status_message: String               // title bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::sync::Arc;

use crate::weather::{WeatherError, WeatherProvider};

/// Maximum number of characters accepted in the city field.
pub const MAX_CITY_CHARS: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Typing a city name.
    #[default]
    Editing,
    /// A lookup is in flight.
    Loading,
    /// The last lookup produced a temperature.
    Done,
    /// The last lookup produced an error.
    Failed,
}

pub struct App {
    pub provider: Arc<dyn WeatherProvider>,
    pub input_text: String,
    pub city: Option<String>,
    pub temperature: Option<f64>,
    pub error: Option<WeatherError>,
    pub phase: Phase,
    pub status_message: String,
}

impl App {
    pub fn new(provider: Arc<dyn WeatherProvider>) -> Self {
        Self {
            provider,
            input_text: String::new(),
            city: None,
            temperature: None,
            error: None,
            phase: Phase::Editing,
            status_message: String::from("Ready"),
        }
    }

    /// Drops the previous lookup and returns to an empty text field.
    pub fn reset(&mut self) {
        self.input_text.clear();
        self.city = None;
        self.temperature = None;
        self.error = None;
        self.phase = Phase::Editing;
        self.status_message = String::from("Ready");
    }

    /// True when `temperature`/`error` agree with `phase`.
    pub fn is_consistent(&self) -> bool {
        match self.phase {
            Phase::Editing | Phase::Loading => self.temperature.is_none() && self.error.is_none(),
            Phase::Done => self.temperature.is_some() && self.error.is_none(),
            Phase::Failed => self.temperature.is_none() && self.error.is_some(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert_eq!(app.phase, Phase::Editing);
        assert!(app.input_text.is_empty());
        assert!(app.city.is_none());
        assert!(app.temperature.is_none());
        assert!(app.error.is_none());
        assert_eq!(app.status_message, "Ready");
        assert!(app.is_consistent());
    }

    #[test]
    fn test_reset_clears_previous_lookup() {
        let mut app = test_app();
        app.input_text = "Berlin".to_string();
        app.city = Some("Berlin".to_string());
        app.error = Some(WeatherError::InvalidCredential);
        app.phase = Phase::Failed;

        app.reset();

        assert_eq!(app.phase, Phase::Editing);
        assert!(app.input_text.is_empty());
        assert!(app.city.is_none());
        assert!(app.error.is_none());
        assert!(app.is_consistent());
    }

    #[test]
    fn test_inconsistent_states_are_detected() {
        let mut app = test_app();
        app.phase = Phase::Done;
        assert!(!app.is_consistent());

        app.temperature = Some(1.0);
        app.error = Some(WeatherError::InvalidCredential);
        assert!(!app.is_consistent());
    }
}
