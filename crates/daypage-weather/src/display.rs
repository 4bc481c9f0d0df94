use chrono::NaiveDateTime;
use serde::Serialize;

use crate::compass::format_wind_direction;
use crate::conditions::describe_weather_code;
use crate::types::{Location, WeatherSnapshot};

pub const FALLBACK_TITLE: &str = "Weather unavailable";
pub const FALLBACK_MESSAGE: &str =
    "We couldn't load the current weather right now. Please try again later.";

/// Open-Meteo reports local time without an offset, minute precision
const PROVIDER_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Round to the nearest integer, halves toward positive infinity (-2.5 becomes -2).
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Display strings for the weather card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeatherDisplay {
    pub location_name: String,
    pub temperature: String,
    pub conditions: String,
    pub wind_speed: String,
    pub wind_direction: String,
    pub observed_at: Option<String>,
}

impl WeatherDisplay {
    pub fn from_snapshot(snapshot: &WeatherSnapshot, location: &Location) -> Self {
        let units = &snapshot.units;

        Self {
            location_name: location.name.clone(),
            temperature: format!(
                "{}{}",
                round_half_up(snapshot.temperature.unwrap_or(0.0)),
                units.temperature
            ),
            conditions: describe_weather_code(snapshot.weather_code).to_string(),
            wind_speed: format!(
                "{} {}",
                round_half_up(snapshot.wind_speed.unwrap_or(0.0)),
                units.wind_speed
            ),
            wind_direction: format_wind_direction(
                snapshot.wind_direction_degrees,
                &units.wind_direction,
            ),
            observed_at: snapshot.observed_at.as_deref().map(format_observed_at),
        }
    }
}

fn format_observed_at(raw: &str) -> String {
    match NaiveDateTime::parse_from_str(raw, PROVIDER_TIME_FORMAT) {
        Ok(time) => time.format("%b %-d, %H:%M").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// What the weather card shows for one page render
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum WeatherPanel {
    Ready(WeatherDisplay),
    /// Static fallback; no partial data
    Unavailable,
}
