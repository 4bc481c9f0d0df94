use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use url::Url;

use crate::error::{AppError, ConfigError};

/// Environment variable that overrides the config file location
pub const CONFIG_PATH_ENV: &str = "DAYPAGE_CONFIG";

/// Configuration validation errors
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Result of config validation
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationResult {
    /// Returns true if there are no errors (warnings are OK)
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn add_warning(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Get a single-line summary of all errors
    pub fn error_summary(&self) -> String {
        self.errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Weather provider settings
    #[serde(default)]
    pub weather: WeatherConfig,

    /// Static page header text
    #[serde(default)]
    pub page: PageConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address the page server listens on
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
}

fn default_bind_addr() -> String {
    "127.0.0.1:3000".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Forecast endpoint (Open-Meteo compatible)
    #[serde(default = "default_weather_endpoint")]
    pub endpoint: String,

    #[serde(default = "default_latitude")]
    pub latitude: f64,

    #[serde(default = "default_longitude")]
    pub longitude: f64,

    /// Label shown on the weather card
    #[serde(default = "default_location_name")]
    pub location_name: String,
}

fn default_weather_endpoint() -> String {
    "https://api.open-meteo.com/v1/forecast".to_string()
}

// New York City
fn default_latitude() -> f64 {
    40.7128
}

fn default_longitude() -> f64 {
    -74.006
}

fn default_location_name() -> String {
    "New York City".to_string()
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            endpoint: default_weather_endpoint(),
            latitude: default_latitude(),
            longitude: default_longitude(),
            location_name: default_location_name(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageConfig {
    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default = "default_subtitle")]
    pub subtitle: String,
}

fn default_title() -> String {
    "Weather & Tasks".to_string()
}

fn default_subtitle() -> String {
    "Stay on top of the forecast and your to-do list in one place.".to_string()
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            subtitle: default_subtitle(),
        }
    }
}

impl Config {
    /// Load configuration from the config file if one exists, otherwise defaults.
    ///
    /// Nothing is written back to disk.
    pub fn load() -> Result<Self, AppError> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            Some(path) => {
                tracing::debug!("No config file at {}, using defaults", path.display());
                Ok(Self::default())
            }
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from an explicit file path
    pub fn load_from(path: &Path) -> Result<Self, AppError> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            tracing::error!("Failed to read config file {}: {}", path.display(), e);
            e
        })?;

        let config: Config =
            toml::from_str(&contents).map_err(|e| ConfigError::ParseError(e.to_string()))?;

        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load configuration and validate it
    ///
    /// Returns an error if validation fails with critical errors; warnings are logged.
    pub fn load_validated() -> Result<(Self, ValidationResult), AppError> {
        Self::load()?.into_validated()
    }

    /// Validate an already loaded configuration, rejecting it on any error.
    pub fn into_validated(self) -> Result<(Self, ValidationResult), AppError> {
        let validation = self.validate();

        if !validation.is_valid() {
            return Err(ConfigError::Invalid(validation.error_summary()).into());
        }

        for warning in &validation.warnings {
            tracing::warn!("Config warning: {}", warning);
        }

        Ok((self, validation))
    }

    /// Validate the configuration
    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::default();

        if self.server.bind_addr.parse::<SocketAddr>().is_err() {
            result.add_error(
                "server.bind_addr",
                format!("Not a socket address: {}", self.server.bind_addr),
            );
        }

        self.validate_url(&self.weather.endpoint, "weather.endpoint", &mut result);

        if !(-90.0..=90.0).contains(&self.weather.latitude) {
            result.add_error("weather.latitude", "Latitude must be between -90 and 90");
        }
        if !(-180.0..=180.0).contains(&self.weather.longitude) {
            result.add_error(
                "weather.longitude",
                "Longitude must be between -180 and 180",
            );
        }

        if self.weather.location_name.trim().is_empty() {
            result.add_warning("weather.location_name", "Location name is empty");
        }

        if self.page.title.trim().is_empty() {
            result.add_error("page.title", "Page title must not be empty");
        }

        result
    }

    fn validate_url(&self, url_str: &str, field_name: &str, result: &mut ValidationResult) {
        match Url::parse(url_str) {
            Ok(url) => {
                if url.scheme() != "http" && url.scheme() != "https" {
                    result.add_error(
                        field_name,
                        format!("URL must use http or https scheme, got: {}", url.scheme()),
                    );
                }

                if url.host().is_none() {
                    result.add_error(field_name, "URL must have a host");
                }

                if url.scheme() == "http" {
                    result.add_warning(field_name, "Weather endpoint is not using https");
                }
            }
            Err(e) => {
                result.add_error(field_name, format!("Invalid URL: {}", e));
            }
        }
    }

    /// Path of the config file: `$DAYPAGE_CONFIG`, else `<config_dir>/daypage/config.toml`
    fn config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            return Some(PathBuf::from(path));
        }

        dirs::config_dir().map(|dir| dir.join("daypage").join("config.toml"))
    }
}
