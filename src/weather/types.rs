//! Typed view of the OpenWeather "current weather" payload.
//!
//! Only two fields matter:
//!
//! ```text
//! {
//!   "cod": 200,              // number on success, often a string ("404") on errors
//!   "main": { "temp": 295.15 }  // Kelvin, only present on success
//! }
//! ```
//!
//! The HTTP status line is ignored. `cod` alone decides the outcome.

use log::debug;
use serde::Deserialize;

use super::provider::WeatherError;

/// Offset between Kelvin and Celsius.
pub const KELVIN_OFFSET: f64 = 273.15;

pub fn kelvin_to_celsius(kelvin: f64) -> f64 {
    kelvin - KELVIN_OFFSET
}

/// The `cod` field. OpenWeather sends it as a number or as a numeric string
/// depending on the endpoint and outcome.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum StatusCode {
    Number(i64),
    /// Floating-point form, e.g. `200.0`.
    Float(f64),
    Text(String),
    /// Anything else (objects, booleans, null).
    Other(serde_json::Value),
}

impl StatusCode {
    /// Numeric value of the code, if it has one.
    pub fn code(&self) -> Option<i64> {
        match self {
            StatusCode::Number(n) => Some(*n),
            StatusCode::Float(f) if f.is_finite() && f.fract() == 0.0 => Some(*f as i64),
            StatusCode::Float(_) => None,
            StatusCode::Text(s) => s.trim().parse().ok(),
            StatusCode::Other(_) => None,
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct MainReading {
    pub temp: Option<f64>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct WeatherPayload {
    pub cod: Option<StatusCode>,
    pub main: Option<MainReading>,
}

/// What a payload means, before it is turned into a result.
#[derive(Debug, Clone, PartialEq)]
pub enum Reading {
    Temperature { kelvin: f64 },
    Unauthorized,
    /// `cod` present but neither 200 nor 401.
    Rejected(StatusCode),
    /// `cod` was 200 but `main.temp` is missing.
    MissingTemperature,
    /// No `cod` at all.
    NoStatus,
}

impl WeatherPayload {
    /// Parses a response body. Anything that is not a JSON object is rejected.
    pub fn parse(body: &str) -> Result<Self, WeatherError> {
        let value: serde_json::Value = serde_json::from_str(body)
            .map_err(|e| WeatherError::UnexpectedResponse(format!("body is not JSON ({e})")))?;

        if !value.is_object() {
            return Err(WeatherError::UnexpectedResponse(
                "body is not a JSON object".to_string(),
            ));
        }

        serde_json::from_value(value)
            .map_err(|e| WeatherError::UnexpectedResponse(format!("malformed payload ({e})")))
    }

    pub fn reading(&self) -> Reading {
        let Some(cod) = &self.cod else {
            return Reading::NoStatus;
        };

        match cod.code() {
            Some(200) => match self.main.as_ref().and_then(|m| m.temp) {
                Some(kelvin) => Reading::Temperature { kelvin },
                None => Reading::MissingTemperature,
            },
            Some(401) => Reading::Unauthorized,
            _ => Reading::Rejected(cod.clone()),
        }
    }

    /// Resolves the payload into a Celsius temperature or the matching error.
    /// `city` is only used to build the `CityNotFound` message.
    pub fn into_celsius(self, city: &str) -> Result<f64, WeatherError> {
        let reading = self.reading();
        debug!("Classified payload for {:?}: {:?}", city, reading);

        match reading {
            Reading::Temperature { kelvin } => Ok(kelvin_to_celsius(kelvin)),
            Reading::Unauthorized => Err(WeatherError::InvalidCredential),
            Reading::Rejected(_) => Err(WeatherError::CityNotFound {
                city: city.to_string(),
            }),
            Reading::MissingTemperature => Err(WeatherError::UnexpectedResponse(
                "missing main.temp".to_string(),
            )),
            Reading::NoStatus => Err(WeatherError::UnexpectedResponse(
                "missing status code".to_string(),
            )),
        }
    }
}

/// Parses and classifies a raw response body in one step.
pub fn celsius_from_body(body: &str, city: &str) -> Result<f64, WeatherError> {
    WeatherPayload::parse(body)?.into_celsius(city)
}
