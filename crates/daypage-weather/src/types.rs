use serde::{Deserialize, Serialize};

pub const DEFAULT_TEMPERATURE_UNIT: &str = "°C";
pub const DEFAULT_WIND_SPEED_UNIT: &str = "km/h";
pub const DEFAULT_WIND_DIRECTION_UNIT: &str = "°";

/// Geographic location the weather is requested for
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    pub name: String,
}

/// Forecast endpoint response body. Only the current-conditions sections are read.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ForecastResponse {
    pub current: Option<CurrentConditions>,
    pub current_units: Option<CurrentUnits>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CurrentConditions {
    pub time: Option<String>,
    pub temperature_2m: Option<f64>,
    pub wind_speed_10m: Option<f64>,
    pub wind_direction_10m: Option<f64>,
    pub weather_code: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CurrentUnits {
    pub temperature_2m: Option<String>,
    pub wind_speed_10m: Option<String>,
    pub wind_direction_10m: Option<String>,
}

/// Unit labels as reported by the provider, with defaults for missing ones
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Units {
    pub temperature: String,
    pub wind_speed: String,
    pub wind_direction: String,
}

impl Default for Units {
    fn default() -> Self {
        Self {
            temperature: DEFAULT_TEMPERATURE_UNIT.to_string(),
            wind_speed: DEFAULT_WIND_SPEED_UNIT.to_string(),
            wind_direction: DEFAULT_WIND_DIRECTION_UNIT.to_string(),
        }
    }
}

impl From<Option<CurrentUnits>> for Units {
    fn from(units: Option<CurrentUnits>) -> Self {
        let units = units.unwrap_or_default();
        Self {
            temperature: units
                .temperature_2m
                .unwrap_or_else(|| DEFAULT_TEMPERATURE_UNIT.to_string()),
            wind_speed: units
                .wind_speed_10m
                .unwrap_or_else(|| DEFAULT_WIND_SPEED_UNIT.to_string()),
            wind_direction: units
                .wind_direction_10m
                .unwrap_or_else(|| DEFAULT_WIND_DIRECTION_UNIT.to_string()),
        }
    }
}

/// One fetched observation. Never stored across requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub observed_at: Option<String>,
    pub temperature: Option<f64>,
    pub wind_speed: Option<f64>,
    pub wind_direction_degrees: Option<f64>,
    pub weather_code: Option<i64>,
    pub units: Units,
}

impl TryFrom<ForecastResponse> for WeatherSnapshot {
    type Error = WeatherError;

    fn try_from(response: ForecastResponse) -> Result<Self, Self::Error> {
        let current = response.current.ok_or(WeatherError::MissingCurrent)?;

        Ok(Self {
            observed_at: current.time,
            temperature: current.temperature_2m,
            wind_speed: current.wind_speed_10m,
            wind_direction_degrees: current.wind_direction_10m,
            // Codes are integers; a fractional value matches nothing in the table
            weather_code: current
                .weather_code
                .filter(|c| c.fract() == 0.0)
                .map(|c| c as i64),
            units: Units::from(response.current_units),
        })
    }
}

/// Weather provider errors
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Weather provider returned HTTP {0}")]
    Status(u16),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Weather data unavailable: response has no current section")]
    MissingCurrent,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> ForecastResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_snapshot_from_full_response() {
        let response = parse(
            r#"{
                "latitude": 40.71,
                "current": {
                    "time": "2026-10-15T09:00",
                    "interval": 900,
                    "temperature_2m": 14.6,
                    "wind_speed_10m": 11.2,
                    "wind_direction_10m": 225,
                    "weather_code": 3
                },
                "current_units": {
                    "temperature_2m": "°F",
                    "wind_speed_10m": "mp/h",
                    "wind_direction_10m": "°"
                }
            }"#,
        );

        let snapshot = WeatherSnapshot::try_from(response).unwrap();
        assert_eq!(snapshot.observed_at.as_deref(), Some("2026-10-15T09:00"));
        assert_eq!(snapshot.temperature, Some(14.6));
        assert_eq!(snapshot.wind_direction_degrees, Some(225.0));
        assert_eq!(snapshot.weather_code, Some(3));
        assert_eq!(snapshot.units.temperature, "°F");
        assert_eq!(snapshot.units.wind_speed, "mp/h");
    }

    #[test]
    fn test_missing_units_use_defaults() {
        let response = parse(r#"{ "current": { "temperature_2m": 20.0 } }"#);
        let snapshot = WeatherSnapshot::try_from(response).unwrap();
        assert_eq!(snapshot.units, Units::default());
        assert_eq!(snapshot.weather_code, None);
    }

    #[test]
    fn test_partial_units_fill_gaps() {
        let response = parse(
            r#"{ "current": {}, "current_units": { "wind_speed_10m": "m/s" } }"#,
        );
        let snapshot = WeatherSnapshot::try_from(response).unwrap();
        assert_eq!(snapshot.units.wind_speed, "m/s");
        assert_eq!(snapshot.units.temperature, DEFAULT_TEMPERATURE_UNIT);
        assert_eq!(snapshot.units.wind_direction, DEFAULT_WIND_DIRECTION_UNIT);
    }

    #[test]
    fn test_missing_current_is_error() {
        let response = parse(r#"{ "current_units": { "temperature_2m": "°C" } }"#);
        let err = WeatherSnapshot::try_from(response).unwrap_err();
        assert!(matches!(err, WeatherError::MissingCurrent));
    }

    #[test]
    fn test_null_current_is_error() {
        let response = parse(r#"{ "current": null }"#);
        assert!(WeatherSnapshot::try_from(response).is_err());
    }

    #[test]
    fn test_fractional_code_is_dropped() {
        let response = parse(r#"{ "current": { "weather_code": 2.5 } }"#);
        let snapshot = WeatherSnapshot::try_from(response).unwrap();
        assert_eq!(snapshot.weather_code, None);
    }

    #[test]
    fn test_wrong_field_type_fails_to_parse() {
        let result: Result<ForecastResponse, _> =
            serde_json::from_str(r#"{ "current": { "temperature_2m": "warm" } }"#);
        assert!(result.is_err());
    }
}
