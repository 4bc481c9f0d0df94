use std::sync::Arc;

use daypage_core::{AppError, Config, PageConfig};
use daypage_tasks::TaskListEditor;
use daypage_weather::{Location, WeatherDisplay, WeatherPanel, WeatherProvider};
use parking_lot::Mutex;

use crate::error_mapping;

/// Page-level controller state shared by all handlers.
///
/// The editor mutex serializes task mutations; it is never held across an await.
#[derive(Clone)]
pub struct AppState {
    pub editor: Arc<Mutex<TaskListEditor>>,
    pub weather: Arc<WeatherProvider>,
    pub page: Arc<PageConfig>,
}

impl AppState {
    pub fn new(weather: WeatherProvider, page: PageConfig) -> Self {
        Self {
            editor: Arc::new(Mutex::new(TaskListEditor::new())),
            weather: Arc::new(weather),
            page: Arc::new(page),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let location = Location {
            latitude: config.weather.latitude,
            longitude: config.weather.longitude,
            name: config.weather.location_name.clone(),
        };
        let provider = WeatherProvider::new(config.weather.endpoint.clone(), location)
            .map_err(error_mapping::weather_error)?;

        Ok(Self::new(provider, config.page.clone()))
    }

    /// One fetch attempt. Failures are logged and become the fallback panel.
    pub async fn load_weather_panel(&self) -> WeatherPanel {
        match self.weather.fetch_current().await {
            Ok(snapshot) => WeatherPanel::Ready(WeatherDisplay::from_snapshot(
                &snapshot,
                self.weather.location(),
            )),
            Err(e) => {
                let err = error_mapping::weather_error(e);
                tracing::error!(
                    user_message = %err.user_message(),
                    "Failed to load current weather: {}",
                    err
                );
                WeatherPanel::Unavailable
            }
        }
    }
}
