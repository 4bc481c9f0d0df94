//! Current-conditions weather for the page
//!
//! Fetches one observation from an Open-Meteo compatible endpoint and turns
//! it into display strings. No caching, no retries.

pub mod compass;
pub mod conditions;
pub mod display;
pub mod provider;
pub mod types;

pub use compass::{format_wind_direction, CompassPoint};
pub use conditions::describe_weather_code;
pub use display::{WeatherDisplay, WeatherPanel, FALLBACK_MESSAGE, FALLBACK_TITLE};
pub use provider::WeatherProvider;
pub use types::*;
