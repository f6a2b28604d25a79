//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! translates keyboard events into core::Action values and performs the
//! effects `core::update` asks for.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! - **Loading**: draws every ~80ms so the spinner animates.
//! - **Otherwise**: sleeps up to 500ms, only redraws on events or resize.
//!
//! ## Lookups
//!
//! `Effect::Resolve` spawns a tokio task that calls the provider and sends
//! `Action::WeatherResolved` back over an mpsc channel. The loop keeps the
//! task's `AbortHandle` and aborts it on quit so the process never waits on
//! the network.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crossterm::cursor::{SetCursorStyle, Show};
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use ratatui::DefaultTerminal;
use tokio::task::AbortHandle;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::{App, Phase};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::weather::{OpenWeatherProvider, WeatherProvider};

const ANIMATION_TICK: Duration = Duration::from_millis(80);
const IDLE_TICK: Duration = Duration::from_millis(500);

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    /// Whether a credential was configured at startup (title bar warning).
    pub has_credential: bool,
}

impl TuiState {
    pub fn new(has_credential: bool) -> Self {
        Self { has_credential }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableBracketedPaste,
            Show,                        // Show cursor for input editing
            SetCursorStyle::SteadyBlock, // Non-blinking: avoids blink timer reset from continuous redraws
        )?;
        info!("Terminal modes enabled (bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            DisableBracketedPaste,
            SetCursorStyle::DefaultUserShape,
            Show
        );
    }
}

/// Build the weather provider from the resolved config.
pub fn build_provider(config: &ResolvedConfig) -> Arc<dyn WeatherProvider> {
    if config.api_key.is_none() {
        warn!("No OpenWeather API key configured; lookups will fail until one is set");
    }
    Arc::new(OpenWeatherProvider::new(
        config.api_key.clone(),
        Some(config.base_url.clone()),
    ))
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::new(build_provider(&config));
    let tui = TuiState::new(config.api_key.is_some());

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    let result = event_loop(&mut terminal, &mut app, &tui);

    ratatui::restore();
    info!("Terminal restored, exiting");
    result
}

fn event_loop(terminal: &mut DefaultTerminal, app: &mut App, tui: &TuiState) -> std::io::Result<()> {
    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();
    let mut active_lookup: Option<AbortHandle> = None;

    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        let animating = app.phase == Phase::Loading;
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_index = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, app, tui, spinner_index))?;
            needs_redraw = false;
        }

        let timeout = if animating { ANIMATION_TICK } else { IDLE_TICK };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            let Some(action) = to_action(event) else {
                continue;
            };
            if dispatch(app, action, &tx, &mut active_lookup) {
                return Ok(());
            }
        }

        // Lookup results
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            if dispatch(app, action, &tx, &mut active_lookup) {
                return Ok(());
            }
        }
    }
}

fn to_action(event: TuiEvent) -> Option<Action> {
    match event {
        TuiEvent::Quit => Some(Action::Quit),
        TuiEvent::Submit => Some(Action::Submit),
        TuiEvent::InputChar(c) => Some(Action::InsertChar(c)),
        TuiEvent::Paste(text) => Some(Action::InsertText(text)),
        TuiEvent::Backspace => Some(Action::DeleteChar),
        // Resize just needs a redraw (already flagged)
        TuiEvent::Resize => None,
    }
}

/// Applies an action and performs its effect. Returns true when the app should quit.
fn dispatch(
    app: &mut App,
    action: Action,
    tx: &mpsc::Sender<Action>,
    active_lookup: &mut Option<AbortHandle>,
) -> bool {
    match update(app, action) {
        Effect::None => false,
        Effect::Resolve(city) => {
            *active_lookup = Some(spawn_lookup(app.provider.clone(), city, tx.clone()));
            false
        }
        Effect::Quit => {
            if let Some(handle) = active_lookup.take() {
                if !handle.is_finished() {
                    info!("Aborting in-flight lookup on quit");
                }
                handle.abort();
            }
            true
        }
    }
}

fn spawn_lookup(
    provider: Arc<dyn WeatherProvider>,
    city: String,
    tx: mpsc::Sender<Action>,
) -> AbortHandle {
    info!("Spawning lookup for {:?} via {}", city, provider.name());
    let handle = tokio::spawn(async move {
        let result = provider.current_temperature(&city).await;
        if tx.send(Action::WeatherResolved(result)).is_err() {
            warn!("Failed to send lookup result for {:?}: receiver dropped", city);
        }
    });
    handle.abort_handle()
}
