//! Maps service errors to daypage_core::AppError for consistent logging and messages.

use daypage_core::{AppError, NetworkError, ReqwestErrorExt, WeatherError};
use daypage_weather::WeatherError as ProviderError;

pub fn weather_error(err: ProviderError) -> AppError {
    match err {
        ProviderError::Network(e) => AppError::Network(e.into_network_error()),
        ProviderError::Status(status) if status >= 500 => {
            AppError::Weather(WeatherError::ServiceUnavailable)
        }
        ProviderError::Status(status) => {
            AppError::Weather(WeatherError::ApiError(format!("HTTP {}", status)))
        }
        ProviderError::Parse(msg) => AppError::Network(NetworkError::InvalidResponse(msg)),
        ProviderError::MissingCurrent => AppError::Weather(WeatherError::DataUnavailable),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_failure_is_service_unavailable() {
        let err = weather_error(ProviderError::Status(502));
        assert!(matches!(
            err,
            AppError::Weather(WeatherError::ServiceUnavailable)
        ));
    }

    #[test]
    fn test_client_status_is_api_error() {
        let err = weather_error(ProviderError::Status(404));
        assert!(err.to_string().contains("HTTP 404"));
    }

    #[test]
    fn test_parse_failure_is_invalid_response() {
        let err = weather_error(ProviderError::Parse("expected value".into()));
        assert!(matches!(
            err,
            AppError::Network(NetworkError::InvalidResponse(_))
        ));
    }

    #[test]
    fn test_missing_current_is_data_unavailable() {
        let err = weather_error(ProviderError::MissingCurrent);
        assert_eq!(err.user_message(), "Weather data is not available right now.");
    }

    #[tokio::test]
    async fn test_unreachable_provider_is_connection_failure() {
        let location = daypage_weather::Location {
            latitude: 40.7128,
            longitude: -74.006,
            name: "New York City".to_string(),
        };
        let provider =
            daypage_weather::WeatherProvider::new("http://127.0.0.1:9/v1/forecast", location)
                .unwrap();

        let err = weather_error(provider.fetch_current().await.unwrap_err());
        assert!(matches!(
            err,
            AppError::Network(NetworkError::ConnectionFailed(_))
        ));
        assert_eq!(err.user_message(), "Could not reach the weather service.");
    }
}
