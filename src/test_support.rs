//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::weather::{WeatherError, WeatherProvider};

/// A provider that returns a canned result and counts lookups.
pub struct StubProvider {
    result: Result<f64, WeatherError>,
    calls: AtomicUsize,
}

impl StubProvider {
    pub fn new(result: Result<f64, WeatherError>) -> Self {
        Self {
            result,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WeatherProvider for StubProvider {
    fn name(&self) -> &str {
        "stub"
    }

    async fn current_temperature(&self, _city: &str) -> Result<f64, WeatherError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }
}

/// Concatenates every cell symbol of a test terminal's buffer.
pub fn buffer_text(terminal: &ratatui::Terminal<ratatui::backend::TestBackend>) -> String {
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|c| c.symbol())
        .collect()
}

/// Creates a test App with a StubProvider that always answers 20°C.
pub fn test_app() -> crate::core::state::App {
    crate::core::state::App::new(Arc::new(StubProvider::new(Ok(20.0))))
}
