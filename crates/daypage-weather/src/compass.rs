use serde::{Deserialize, Serialize};
use std::fmt;

use crate::display::round_half_up;

/// One of eight 45° wind direction sectors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompassPoint {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl CompassPoint {
    const ALL: [CompassPoint; 8] = [
        Self::N,
        Self::NE,
        Self::E,
        Self::SE,
        Self::S,
        Self::SW,
        Self::W,
        Self::NW,
    ];

    /// Nearest sector for a bearing in degrees. Any real value is accepted.
    pub fn from_degrees(degrees: f64) -> Self {
        let remainder = degrees % 360.0;
        let normalized = if remainder < 0.0 {
            remainder + 360.0
        } else {
            remainder
        };
        let index = round_half_up(normalized / 45.0).rem_euclid(8) as usize;
        Self::ALL[index]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::N => "N",
            Self::NE => "NE",
            Self::E => "E",
            Self::SE => "SE",
            Self::S => "S",
            Self::SW => "SW",
            Self::W => "W",
            Self::NW => "NW",
        }
    }
}

impl fmt::Display for CompassPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Format a wind bearing as `"NE (45°)"`, or `"--"` when the provider sent none.
///
/// The number shown is the rounded `degrees % 360`.
pub fn format_wind_direction(degrees: Option<f64>, unit: &str) -> String {
    match degrees {
        Some(degrees) => format!(
            "{} ({}{})",
            CompassPoint::from_degrees(degrees),
            round_half_up(degrees % 360.0),
            unit
        ),
        None => "--".to_string(),
    }
}
