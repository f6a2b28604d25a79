//! OpenWeather provider using the current weather endpoint.
//!
//! One GET per lookup:
//!
//! ```text
//! GET {base_url}/data/2.5/weather?q=<city>&APPID=<key>
//! ```
//!
//! The response body is classified by `weather::types`; the HTTP status is
//! only logged.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};

use crate::weather::query::encode_query_value;
use crate::weather::types::celsius_from_body;
use crate::weather::{WeatherError, WeatherProvider};

pub const DEFAULT_OPENWEATHER_BASE_URL: &str = "https://api.openweathermap.org";

/// Path of the current weather endpoint, relative to the base URL.
const CURRENT_WEATHER_PATH: &str = "/data/2.5/weather";

/// Fixed bound on a single lookup.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub struct OpenWeatherProvider {
    api_key: Option<String>,
    base_url: String,
    timeout: Duration,
    client: reqwest::Client,
}

impl OpenWeatherProvider {
    /// `api_key` may be absent; lookups then fail with `MissingCredential`.
    pub fn new(api_key: Option<String>, base_url: Option<String>) -> Self {
        let base_url = base_url
            .unwrap_or_else(|| DEFAULT_OPENWEATHER_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        Self {
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            base_url,
            timeout: REQUEST_TIMEOUT,
            client: reqwest::Client::new(),
        }
    }

    /// Replaces the per-request timeout. Production code keeps `REQUEST_TIMEOUT`.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn request_url(&self, city: &str, api_key: &str) -> String {
        format!(
            "{}{}?q={}&APPID={}",
            self.base_url,
            CURRENT_WEATHER_PATH,
            encode_query_value(city),
            encode_query_value(api_key)
        )
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    fn name(&self) -> &str {
        "openweather"
    }

    async fn current_temperature(&self, city: &str) -> Result<f64, WeatherError> {
        let Some(api_key) = self.api_key.as_deref() else {
            warn!("Lookup for {:?} refused: no API key configured", city);
            return Err(WeatherError::MissingCredential);
        };

        let url = self.request_url(city, api_key);
        info!(
            "OpenWeather request: {}{}?q={}",
            self.base_url,
            CURRENT_WEATHER_PATH,
            encode_query_value(city)
        );

        let response = self
            .client
            .get(url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| WeatherError::NetworkFailure(e.to_string()))?;

        debug!("OpenWeather response status: {}", response.status());

        let body = response
            .text()
            .await
            .map_err(|e| WeatherError::NetworkFailure(e.to_string()))?;

        debug!("OpenWeather response body: {} bytes", body.len());

        let result = celsius_from_body(&body, city);
        match &result {
            Ok(celsius) => info!("Resolved {:?} to {:.2}°C", city, celsius),
            Err(e) => warn!("Lookup for {:?} failed: {}", city, e),
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_fails_without_request() {
        // Port 9 (discard) on localhost: any request attempt would surface as NetworkFailure.
        let provider = OpenWeatherProvider::new(None, Some("http://127.0.0.1:9".to_string()));
        let result = tokio_test::block_on(provider.current_temperature("Berlin"));
        assert_eq!(result, Err(WeatherError::MissingCredential));
    }

    #[test]
    fn test_blank_key_counts_as_missing() {
        let provider = OpenWeatherProvider::new(Some("   ".to_string()), None);
        let result = tokio_test::block_on(provider.current_temperature("Berlin"));
        assert_eq!(result, Err(WeatherError::MissingCredential));
    }

    #[test]
    fn test_request_url_encodes_city_and_key() {
        let provider = OpenWeatherProvider::new(
            Some("abc123".to_string()),
            Some("http://localhost:8080/".to_string()),
        );
        assert_eq!(
            provider.request_url("Rio de Janeiro", "abc123"),
            "http://localhost:8080/data/2.5/weather?q=Rio+de+Janeiro&APPID=abc123"
        );
        assert_eq!(
            provider.request_url("Baden-Baden", "abc123"),
            "http://localhost:8080/data/2.5/weather?q=Baden%2DBaden&APPID=abc123"
        );
    }

    #[test]
    fn test_default_base_url() {
        let provider = OpenWeatherProvider::new(Some("k".to_string()), None);
        assert_eq!(provider.base_url, DEFAULT_OPENWEATHER_BASE_URL);
        assert_eq!(provider.name(), "openweather");
    }

    #[test]
    fn test_lookups_are_bounded_by_ten_seconds() {
        assert_eq!(REQUEST_TIMEOUT, Duration::from_secs(10));
        let provider = OpenWeatherProvider::new(Some("k".to_string()), None);
        assert_eq!(provider.timeout, REQUEST_TIMEOUT);
    }
}
