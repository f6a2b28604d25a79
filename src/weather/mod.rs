//! # Weather Resolver
//!
//! Turns a city name into a temperature in degrees Celsius with one HTTP call.
//!
//! ```text
//! city ──► query::encode_query_value ──► GET /data/2.5/weather
//!                                             │
//!                     types::WeatherPayload ◄─┘
//!                             │
//!                  Result<f64, WeatherError>
//! ```

pub mod provider;
pub mod providers;
pub mod query;
pub mod types;

pub use provider::{WeatherError, WeatherProvider};
pub use providers::OpenWeatherProvider;
pub use types::{KELVIN_OFFSET, kelvin_to_celsius};
