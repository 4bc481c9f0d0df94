//! Centralized error types for the daypage server.
//!
//! Each error carries a technical `Display` for logs and a `user_message()`
//! suitable for showing on the page.

use thiserror::Error;

/// Top-level application error type.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Weather service error: {0}")]
    Weather(#[from] WeatherError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Returns a user-friendly message suitable for display on the page.
    pub fn user_message(&self) -> &'static str {
        match self {
            AppError::Network(e) => e.user_message(),
            AppError::Config(e) => e.user_message(),
            AppError::Weather(e) => e.user_message(),
            AppError::Io(_) => "A file or socket operation failed.",
        }
    }
}

/// Network-related errors (HTTP, connectivity).
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl NetworkError {
    pub fn user_message(&self) -> &'static str {
        match self {
            NetworkError::ConnectionFailed(_) => {
                "Could not reach the weather service."
            }
            NetworkError::InvalidResponse(_) => {
                "The weather service sent a response that could not be read."
            }
        }
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Configuration parse error: {0}")]
    ParseError(String),
}

impl ConfigError {
    pub fn user_message(&self) -> &'static str {
        match self {
            ConfigError::Invalid(_) => "The config file has invalid values.",
            ConfigError::ParseError(_) => "The config file is not valid TOML.",
        }
    }
}

/// Weather service errors.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("Weather API error: {0}")]
    ApiError(String),

    #[error("Weather data unavailable")]
    DataUnavailable,

    #[error("Service unavailable")]
    ServiceUnavailable,
}

impl WeatherError {
    pub fn user_message(&self) -> &'static str {
        match self {
            WeatherError::ApiError(_) => "The weather service rejected the request.",
            WeatherError::DataUnavailable => "Weather data is not available right now.",
            WeatherError::ServiceUnavailable => {
                "The weather service is down right now."
            }
        }
    }
}

/// Classify a transport failure from the weather client.
///
/// Status codes never reach here; the client checks them itself.
pub trait ReqwestErrorExt {
    fn into_network_error(self) -> NetworkError;
}

impl ReqwestErrorExt for reqwest::Error {
    fn into_network_error(self) -> NetworkError {
        if self.is_decode() || self.is_body() {
            NetworkError::InvalidResponse(self.to_string())
        } else {
            NetworkError::ConnectionFailed(self.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_conversion() {
        let weather_err = WeatherError::DataUnavailable;
        let app_err: AppError = weather_err.into();
        assert!(matches!(
            app_err,
            AppError::Weather(WeatherError::DataUnavailable)
        ));
    }

    #[test]
    fn test_config_error_conversion() {
        let app_err: AppError = ConfigError::Invalid("page.title: empty".into()).into();
        assert!(matches!(app_err, AppError::Config(ConfigError::Invalid(_))));
        assert_eq!(
            app_err.user_message(),
            "The config file has invalid values."
        );
    }

    #[test]
    fn test_user_message_propagation() {
        let app_err = AppError::Network(NetworkError::ConnectionFailed("refused".into()));
        assert_eq!(
            app_err.user_message(),
            "Could not reach the weather service."
        );

        let io_err: AppError = std::io::Error::from(std::io::ErrorKind::AddrInUse).into();
        assert!(matches!(io_err, AppError::Io(_)));
    }
}
