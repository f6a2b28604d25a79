//! # Actions
//!
//! Everything that can happen in Nimbus becomes an `Action`.
//! User presses Enter? That's `Action::Submit`.
//! The lookup finishes? That's `Action::WeatherResolved(result)`.
//!
//! The `update()` function applies an action to the state and returns an
//! `Effect` describing the I/O the caller has to perform. No side effects here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! ```text
//!            Submit (non-blank)              Ok(temp)
//!  Editing ───────────────────► Loading ───────────────► Done
//!     ▲                            │                       │
//!     │                            │ Err(e)                │
//!     │                            ▼                       │
//!     ├──────── any key ──────── Failed                    │
//!     └──────── any key ───────────────────────────────────┘
//! ```

use log::{debug, info, warn};

use crate::core::state::{App, MAX_CITY_CHARS, Phase};
use crate::weather::WeatherError;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// A printable character typed into the field.
    InsertChar(char),
    /// Bracketed paste.
    InsertText(String),
    /// Backspace.
    DeleteChar,
    /// Enter.
    Submit,
    /// A lookup finished.
    WeatherResolved(Result<f64, WeatherError>),
    /// Esc or Ctrl+C.
    Quit,
}

/// I/O requested by `update()`, performed by the adapter.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    Quit,
    /// Start a lookup for this city.
    Resolve(String),
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: phase={:?} action={:?}", app.phase, action);

    match action {
        Action::Quit => {
            info!("Quit requested in phase {:?}", app.phase);
            Effect::Quit
        }

        Action::WeatherResolved(result) => {
            if app.phase != Phase::Loading {
                warn!("Dropping lookup result outside Loading: {:?}", result);
                return Effect::None;
            }
            match result {
                Ok(celsius) => {
                    app.temperature = Some(celsius);
                    app.phase = Phase::Done;
                    app.status_message = String::from("Done");
                }
                Err(e) => {
                    app.error = Some(e);
                    app.phase = Phase::Failed;
                    app.status_message = String::from("Lookup failed");
                }
            }
            Effect::None
        }

        // The lookup cannot be re-triggered or edited while in flight
        _ if app.phase == Phase::Loading => Effect::None,

        Action::Submit => match app.phase {
            Phase::Done | Phase::Failed => {
                app.reset();
                Effect::None
            }
            _ => submit(app),
        },

        Action::InsertChar(c) => {
            begin_edit(app);
            insert(app, std::iter::once(c));
            Effect::None
        }

        Action::InsertText(text) => {
            begin_edit(app);
            let cleaned = text.chars().map(|c| if c.is_control() { ' ' } else { c });
            insert(app, cleaned);
            Effect::None
        }

        Action::DeleteChar => {
            if !begin_edit(app) {
                app.input_text.pop();
            }
            Effect::None
        }
    }
}

/// Title bar status after confirming an empty field.
const BLANK_CITY_STATUS: &str = "Type a city name first";

fn submit(app: &mut App) -> Effect {
    let city = app.input_text.trim();
    if city.is_empty() {
        app.status_message = String::from(BLANK_CITY_STATUS);
        return Effect::None;
    }

    let city = city.to_string();
    app.city = Some(city.clone());
    app.phase = Phase::Loading;
    app.status_message = format!("Asking {}...", app.provider.name());
    info!("Lookup requested for {:?}", city);
    Effect::Resolve(city)
}

/// Prepares the field for an edit. Returns true if it left Done/Failed for a
/// fresh Editing phase.
fn begin_edit(app: &mut App) -> bool {
    if matches!(app.phase, Phase::Done | Phase::Failed) {
        debug!("Restarting editing after {:?}", app.phase);
        app.reset();
        return true;
    }
    if app.status_message == BLANK_CITY_STATUS {
        app.status_message = String::from("Ready");
    }
    false
}

fn insert(app: &mut App, chars: impl Iterator<Item = char>) {
    let room = MAX_CITY_CHARS.saturating_sub(app.input_text.chars().count());
    app.input_text.extend(chars.take(room));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            assert_eq!(update(app, Action::InsertChar(c)), Effect::None);
        }
    }

    #[test]
    fn test_typing_edits_the_field() {
        let mut app = test_app();
        type_text(&mut app, "Berlx");
        update(&mut app, Action::DeleteChar);
        type_text(&mut app, "in");
        assert_eq!(app.input_text, "Berlin");
        assert_eq!(app.phase, Phase::Editing);
    }

    #[test]
    fn test_submit_starts_lookup_with_trimmed_city() {
        let mut app = test_app();
        type_text(&mut app, "  Berlin ");

        let effect = update(&mut app, Action::Submit);

        assert_eq!(effect, Effect::Resolve("Berlin".to_string()));
        assert_eq!(app.phase, Phase::Loading);
        assert_eq!(app.city.as_deref(), Some("Berlin"));
        assert!(app.is_consistent());
    }

    #[test]
    fn test_blank_submit_does_not_dispatch() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Submit), Effect::None);

        type_text(&mut app, "   ");
        assert_eq!(update(&mut app, Action::Submit), Effect::None);
        assert_eq!(app.phase, Phase::Editing);
        assert!(app.city.is_none());
    }

    #[test]
    fn test_typing_after_blank_submit_clears_status() {
        let mut app = test_app();
        update(&mut app, Action::Submit);
        assert_eq!(app.status_message, "Type a city name first");

        update(&mut app, Action::DeleteChar);
        assert_eq!(app.status_message, "Ready");

        update(&mut app, Action::Submit);
        update(&mut app, Action::InsertChar('O'));
        assert_eq!(app.status_message, "Ready");
        assert_eq!(app.input_text, "O");
    }

    #[test]
    fn test_submit_while_loading_is_ignored() {
        let mut app = test_app();
        type_text(&mut app, "Berlin");
        update(&mut app, Action::Submit);

        assert_eq!(update(&mut app, Action::Submit), Effect::None);
        assert_eq!(update(&mut app, Action::InsertChar('x')), Effect::None);
        assert_eq!(update(&mut app, Action::DeleteChar), Effect::None);

        assert_eq!(app.phase, Phase::Loading);
        assert_eq!(app.input_text, "Berlin");
    }

    #[test]
    fn test_success_moves_to_done() {
        let mut app = test_app();
        type_text(&mut app, "Berlin");
        update(&mut app, Action::Submit);

        update(&mut app, Action::WeatherResolved(Ok(22.0)));

        assert_eq!(app.phase, Phase::Done);
        assert_eq!(app.temperature, Some(22.0));
        assert!(app.is_consistent());
    }

    #[test]
    fn test_failure_moves_to_failed() {
        let mut app = test_app();
        type_text(&mut app, "Atlantis");
        update(&mut app, Action::Submit);

        update(
            &mut app,
            Action::WeatherResolved(Err(WeatherError::CityNotFound {
                city: "Atlantis".to_string(),
            })),
        );

        assert_eq!(app.phase, Phase::Failed);
        assert!(matches!(app.error, Some(WeatherError::CityNotFound { .. })));
        assert!(app.is_consistent());
    }

    #[test]
    fn test_stale_result_is_dropped() {
        let mut app = test_app();
        update(&mut app, Action::WeatherResolved(Ok(10.0)));
        assert_eq!(app.phase, Phase::Editing);
        assert!(app.temperature.is_none());
    }

    #[test]
    fn test_quit_from_every_phase() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);

        type_text(&mut app, "Berlin");
        update(&mut app, Action::Submit);
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }

    #[test]
    fn test_keystroke_after_done_restarts_editing() {
        let mut app = test_app();
        type_text(&mut app, "Berlin");
        update(&mut app, Action::Submit);
        update(&mut app, Action::WeatherResolved(Ok(22.0)));

        update(&mut app, Action::InsertChar('P'));

        assert_eq!(app.phase, Phase::Editing);
        assert_eq!(app.input_text, "P");
        assert!(app.city.is_none());
        assert!(app.is_consistent());
    }

    #[test]
    fn test_enter_after_failure_only_resets() {
        let mut app = test_app();
        type_text(&mut app, "Berlin");
        update(&mut app, Action::Submit);
        update(
            &mut app,
            Action::WeatherResolved(Err(WeatherError::MissingCredential)),
        );

        assert_eq!(update(&mut app, Action::Submit), Effect::None);
        assert_eq!(app.phase, Phase::Editing);
        assert!(app.input_text.is_empty());
        assert!(app.is_consistent());
    }

    #[test]
    fn test_backspace_after_done_resets_without_deleting() {
        let mut app = test_app();
        type_text(&mut app, "Oslo");
        update(&mut app, Action::Submit);
        update(&mut app, Action::WeatherResolved(Ok(-3.0)));

        update(&mut app, Action::DeleteChar);
        assert_eq!(app.phase, Phase::Editing);
        assert!(app.input_text.is_empty());
    }

    #[test]
    fn test_field_is_capped() {
        let mut app = test_app();
        type_text(&mut app, &"a".repeat(MAX_CITY_CHARS + 5));
        assert_eq!(app.input_text.chars().count(), MAX_CITY_CHARS);

        update(&mut app, Action::DeleteChar);
        update(&mut app, Action::InsertText("xyz".to_string()));
        assert_eq!(app.input_text.chars().count(), MAX_CITY_CHARS);
        assert!(app.input_text.ends_with('x'));
    }

    #[test]
    fn test_paste_replaces_control_characters() {
        let mut app = test_app();
        update(&mut app, Action::InsertText("New\nYork\t".to_string()));
        assert_eq!(app.input_text, "New York ");
        assert_eq!(
            update(&mut app, Action::Submit),
            Effect::Resolve("New York".to_string())
        );
    }
}
