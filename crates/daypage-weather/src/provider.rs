use reqwest::header::CACHE_CONTROL;
use reqwest::Client;
use std::sync::Arc;

use crate::types::{ForecastResponse, Location, WeatherError, WeatherSnapshot};

/// Current-condition variables requested from the provider
pub const CURRENT_FIELDS: &str = "temperature_2m,weather_code,wind_speed_10m,wind_direction_10m";

const USER_AGENT: &str = concat!("daypage/", env!("CARGO_PKG_VERSION"));

/// Client for an Open-Meteo compatible forecast endpoint.
///
/// Each call is a single attempt with no timeout override and no caching.
#[derive(Debug, Clone)]
pub struct WeatherProvider {
    client: Arc<Client>,
    endpoint: String,
    location: Location,
}

impl WeatherProvider {
    pub fn new(endpoint: impl Into<String>, location: Location) -> Result<Self, WeatherError> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self {
            client: Arc::new(client),
            endpoint: endpoint.into(),
            location,
        })
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    /// Fetch the current observation for the configured location.
    ///
    /// Non-2xx status, an unparseable body, or a body without `current` are all errors.
    pub async fn fetch_current(&self) -> Result<WeatherSnapshot, WeatherError> {
        tracing::debug!(
            "Fetching current weather for {}, {}",
            self.location.latitude,
            self.location.longitude
        );

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("latitude", self.location.latitude.to_string()),
                ("longitude", self.location.longitude.to_string()),
                ("current", CURRENT_FIELDS.to_string()),
            ])
            .header(CACHE_CONTROL, "no-store")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(WeatherError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let parsed: ForecastResponse =
            serde_json::from_str(&body).map_err(|e| WeatherError::Parse(e.to_string()))?;

        let snapshot = WeatherSnapshot::try_from(parsed)?;
        tracing::debug!("Weather observation at {:?}", snapshot.observed_at);
        Ok(snapshot)
    }
}
