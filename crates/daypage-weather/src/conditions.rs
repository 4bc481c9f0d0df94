/// Label for codes missing from the table, or no code at all
pub const UNKNOWN_CONDITIONS: &str = "Unknown conditions";

/// Describe a WMO weather interpretation code
/// See: https://open-meteo.com/en/docs#weathervariables
pub fn describe_weather_code(code: Option<i64>) -> &'static str {
    let Some(code) = code else {
        return UNKNOWN_CONDITIONS;
    };

    match code {
        0 => "Clear sky",
        1 => "Mainly clear",
        2 => "Partly cloudy",
        3 => "Overcast",
        45 => "Fog",
        48 => "Depositing rime fog",
        51 => "Light drizzle",
        53 => "Moderate drizzle",
        55 => "Dense drizzle",
        56 => "Light freezing drizzle",
        57 => "Dense freezing drizzle",
        61 => "Slight rain",
        63 => "Moderate rain",
        65 => "Heavy rain",
        66 => "Light freezing rain",
        67 => "Heavy freezing rain",
        71 => "Slight snow fall",
        73 => "Moderate snow fall",
        75 => "Heavy snow fall",
        77 => "Snow grains",
        80 => "Slight rain showers",
        81 => "Moderate rain showers",
        82 => "Violent rain showers",
        85 => "Slight snow showers",
        86 => "Heavy snow showers",
        95 => "Thunderstorm",
        96 => "Thunderstorm with slight hail",
        99 => "Thunderstorm with heavy hail",
        _ => UNKNOWN_CONDITIONS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_sky() {
        assert_eq!(describe_weather_code(Some(0)), "Clear sky");
    }

    #[test]
    fn test_known_codes() {
        assert_eq!(describe_weather_code(Some(3)), "Overcast");
        assert_eq!(describe_weather_code(Some(48)), "Depositing rime fog");
        assert_eq!(describe_weather_code(Some(82)), "Violent rain showers");
        assert_eq!(describe_weather_code(Some(99)), "Thunderstorm with heavy hail");
    }

    #[test]
    fn test_unknown_code() {
        assert_eq!(describe_weather_code(Some(999)), UNKNOWN_CONDITIONS);
        assert_eq!(describe_weather_code(Some(4)), UNKNOWN_CONDITIONS);
        assert_eq!(describe_weather_code(Some(-1)), UNKNOWN_CONDITIONS);
    }

    #[test]
    fn test_absent_code() {
        assert_eq!(describe_weather_code(None), "Unknown conditions");
    }
}
