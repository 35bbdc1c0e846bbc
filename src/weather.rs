//! Current-weather lookup.
//!
//! An external boundary, not part of the stored data: the client fetches the
//! current conditions for a coordinate pair and delivers exactly one outcome
//! per request. The task is cancellable and bounded by a timeout, so an
//! abandoned lookup (the user navigated away) neither leaks nor reports late.

use crate::errors::WeatherError;
use serde::Deserialize;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";

/// Response envelope from the current-weather endpoint.
#[derive(Debug, Deserialize)]
struct WeatherResponse {
    weather: Vec<Condition>,
    main: Thermals,
    #[serde(default)]
    name: String,
}

#[derive(Debug, Deserialize)]
struct Condition {
    main: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct Thermals {
    temp: f64,
}

/// Decoded current conditions for one coordinate pair.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentWeather {
    /// Condition group, e.g. "Clouds".
    pub condition: String,
    /// Longer condition text, e.g. "scattered clouds".
    pub description: String,
    /// Temperature in Kelvin, as reported by the endpoint.
    pub temperature_kelvin: f64,
    /// Reporting station or locality name; may be empty.
    pub station: String,
}

/// The single result delivered for one lookup.
#[derive(Debug)]
pub enum WeatherOutcome {
    /// The lookup completed and decoded.
    Current(CurrentWeather),
    /// The lookup failed (transport, decode, or timeout).
    Failed(WeatherError),
    /// The lookup was cancelled before completing; no late result follows.
    Cancelled,
}

/// Client for the current-weather endpoint.
pub struct WeatherClient {
    base_url: String,
    api_key: String,
    client: reqwest::Client,
    timeout: Duration,
}

impl WeatherClient {
    /// Creates a client against the production endpoint.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, api_key)
    }

    /// Creates a client against a custom endpoint (used by tests).
    pub fn with_base_url(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            client: reqwest::Client::new(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Overrides the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Fetches the current weather for a coordinate pair.
    ///
    /// Delivers exactly one [`WeatherOutcome`]: success, failure (including
    /// timeout), or cancelled. Cancellation wins over a response that arrives
    /// in the same instant; once cancelled, no late result is reported.
    pub async fn fetch_current(
        &self,
        latitude: f64,
        longitude: f64,
        cancel: &CancellationToken,
    ) -> WeatherOutcome {
        debug!("Fetching weather for ({}, {})", latitude, longitude);

        let request = self.request_current(latitude, longitude);

        tokio::select! {
            biased;

            _ = cancel.cancelled() => {
                debug!("Weather lookup cancelled");
                WeatherOutcome::Cancelled
            }
            result = tokio::time::timeout(self.timeout, request) => match result {
                Ok(Ok(weather)) => WeatherOutcome::Current(weather),
                Ok(Err(e)) => WeatherOutcome::Failed(e),
                Err(_) => WeatherOutcome::Failed(WeatherError::Timeout(self.timeout.as_secs())),
            },
        }
    }

    async fn request_current(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<CurrentWeather, WeatherError> {
        let url = format!(
            "{}/data/2.5/weather?lat={}&lon={}&appid={}",
            self.base_url, latitude, longitude, self.api_key
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(WeatherError::Request)?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(WeatherError::InvalidResponse(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let decoded: WeatherResponse = response.json().await.map_err(|e| {
            WeatherError::InvalidResponse(format!("Failed to parse weather response: {}", e))
        })?;

        let condition = decoded
            .weather
            .first()
            .ok_or_else(|| WeatherError::InvalidResponse("Empty conditions array".to_string()))?;

        Ok(CurrentWeather {
            condition: condition.main.clone(),
            description: condition.description.clone(),
            temperature_kelvin: decoded.main.temp,
            station: decoded.name,
        })
    }
}
