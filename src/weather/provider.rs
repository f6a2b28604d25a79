use std::fmt;

use async_trait::async_trait;

/// Errors a weather lookup can end in.
/// None of them are retried; each one ends the current lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WeatherError {
    /// No API key configured. Detected before any request is made.
    MissingCredential,
    /// Transport-level failure (timeout, DNS, connection refused, body read).
    NetworkFailure(String),
    /// The payload reported `cod: 401`.
    InvalidCredential,
    /// The payload carried a status code other than 200/401.
    CityNotFound { city: String },
    /// The body was not JSON, had no status code, or lacked the temperature.
    UnexpectedResponse(String),
}

impl fmt::Display for WeatherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeatherError::MissingCredential => write!(f, "OPEN_WEATHER_API_KEY is not set"),
            WeatherError::NetworkFailure(cause) => write!(f, "network error: {cause}"),
            WeatherError::InvalidCredential => write!(f, "invalid API key"),
            WeatherError::CityNotFound { city } => write!(f, "city \"{city}\" not found"),
            WeatherError::UnexpectedResponse(detail) => {
                write!(f, "unexpected response: {detail}")
            }
        }
    }
}

impl std::error::Error for WeatherError {}

/// Resolves a city name to its current temperature in degrees Celsius.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Returns the name of the provider.
    fn name(&self) -> &str;

    /// Performs a single lookup for `city`.
    async fn current_temperature(&self, city: &str) -> Result<f64, WeatherError>;
}
