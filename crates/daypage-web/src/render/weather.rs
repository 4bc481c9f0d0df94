use daypage_weather::{WeatherDisplay, WeatherPanel, FALLBACK_MESSAGE, FALLBACK_TITLE};
use hypertext::prelude::*;

pub fn render_weather_panel(panel: &WeatherPanel) -> String {
    match panel {
        WeatherPanel::Ready(display) => render_ready(display),
        WeatherPanel::Unavailable => render_unavailable(),
    }
}

fn render_ready(display: &WeatherDisplay) -> String {
    let observed = display.observed_at.as_deref().unwrap_or_default();

    maud! {
        section .card.weather-card {
            header .weather-header {
                div {
                    p .eyebrow { "Current weather" }
                    h2 { (display.location_name) }
                }
                span .temperature { (display.temperature) }
            }
            dl .weather-details {
                div {
                    dt { "Conditions" }
                    dd { (display.conditions) }
                }
                div {
                    dt { "Wind speed" }
                    dd { (display.wind_speed) }
                }
                div {
                    dt { "Wind direction" }
                    dd { (display.wind_direction) }
                }
            }
            @if !observed.is_empty() {
                p .observed { "Observed " (observed) }
            }
            p .attribution {
                "Powered by "
                a href="https://open-meteo.com/" target="_blank" rel="noreferrer" { "Open-Meteo" }
                "."
            }
        }
    }
    .render()
    .into_inner()
}

fn render_unavailable() -> String {
    maud! {
        section .card.weather-unavailable {
            h2 { (FALLBACK_TITLE) }
            p { (FALLBACK_MESSAGE) }
        }
    }
    .render()
    .into_inner()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn display() -> WeatherDisplay {
        WeatherDisplay {
            location_name: "New York City".to_string(),
            temperature: "15°C".to_string(),
            conditions: "Clear sky".to_string(),
            wind_speed: "11 km/h".to_string(),
            wind_direction: "NE (44°)".to_string(),
            observed_at: Some("Oct 15, 09:15".to_string()),
        }
    }

    #[test]
    fn test_ready_card_shows_all_fields() {
        let html = render_weather_panel(&WeatherPanel::Ready(display()));
        assert!(html.contains("New York City"));
        assert!(html.contains("15°C"));
        assert!(html.contains("Clear sky"));
        assert!(html.contains("11 km/h"));
        assert!(html.contains("NE (44°)"));
        assert!(html.contains("Oct 15, 09:15"));
        assert!(!html.contains(FALLBACK_TITLE));
    }

    #[test]
    fn test_ready_card_without_time() {
        let mut d = display();
        d.observed_at = None;
        let html = render_weather_panel(&WeatherPanel::Ready(d));
        assert!(!html.contains("Observed"));
    }

    #[test]
    fn test_fallback_card() {
        let html = render_weather_panel(&WeatherPanel::Unavailable);
        assert!(html.contains("Weather unavailable"));
        assert!(html.contains("Please try again later."));
        assert!(!html.contains("Wind speed"));
    }
}
