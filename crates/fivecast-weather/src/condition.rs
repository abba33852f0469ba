//! WMO weather code to display category mapping.
//! See: https://open-meteo.com/en/docs#weathervariables

use serde::{Deserialize, Serialize};

/// Weather condition categories mapped from WMO codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionCategory {
    Clear,
    PartlyCloudy,
    Overcast,
    Fog,
    Drizzle,
    FreezingDrizzle,
    Rain,
    FreezingRain,
    Snow,
    SnowGrains,
    RainShowers,
    SnowShowers,
    Thunderstorm,
    ThunderstormHail,
    Unknown,
}

impl ConditionCategory {
    /// Convert WMO weather code to a category. Total over `i32`.
    pub fn from_wmo_code(code: i32) -> Self {
        match code {
            0 => Self::Clear,
            1 | 2 => Self::PartlyCloudy,
            3 => Self::Overcast,
            45 | 48 => Self::Fog,
            51 | 53 | 55 => Self::Drizzle,
            56 | 57 => Self::FreezingDrizzle,
            61 | 63 | 65 => Self::Rain,
            66 | 67 => Self::FreezingRain,
            71 | 73 | 75 => Self::Snow,
            77 => Self::SnowGrains,
            80..=82 => Self::RainShowers,
            85 | 86 => Self::SnowShowers,
            95 => Self::Thunderstorm,
            96 | 99 => Self::ThunderstormHail,
            _ => Self::Unknown,
        }
    }

    /// Get a human-readable description
    pub fn label(&self) -> &'static str {
        match self {
            Self::Clear => "Clear",
            Self::PartlyCloudy => "Partly Cloudy",
            Self::Overcast => "Overcast",
            Self::Fog => "Fog",
            Self::Drizzle => "Drizzle",
            Self::FreezingDrizzle => "Freezing Drizzle",
            Self::Rain => "Rain",
            Self::FreezingRain => "Freezing Rain",
            Self::Snow => "Snow",
            Self::SnowGrains => "Snow Grains",
            Self::RainShowers => "Rain Showers",
            Self::SnowShowers => "Snow Showers",
            Self::Thunderstorm => "Thunderstorm",
            Self::ThunderstormHail => "Thunderstorm with Hail",
            Self::Unknown => "Unknown",
        }
    }

    /// Symbol name for toolkits with an SF Symbols style icon set
    pub fn icon_name(&self) -> &'static str {
        match self {
            Self::Clear => "sun.max.fill",
            Self::PartlyCloudy => "cloud.sun",
            Self::Overcast => "cloud",
            Self::Fog => "cloud.fog",
            Self::Drizzle | Self::FreezingDrizzle => "cloud.drizzle",
            Self::Rain => "cloud.rain",
            Self::FreezingRain => "cloud.sleet",
            Self::Snow => "snowflake",
            Self::SnowGrains | Self::SnowShowers => "cloud.snow",
            Self::RainShowers => "cloud.heavyrain",
            Self::Thunderstorm => "cloud.bolt",
            Self::ThunderstormHail => "cloud.bolt.rain",
            Self::Unknown => "questionmark",
        }
    }

    /// Single-character glyph for terminal output
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Clear => "☀",
            Self::PartlyCloudy => "⛅",
            Self::Overcast => "☁",
            Self::Fog => "🌫",
            Self::Drizzle | Self::FreezingDrizzle => "🌦",
            Self::Rain | Self::RainShowers => "🌧",
            Self::FreezingRain => "🧊",
            Self::Snow | Self::SnowGrains | Self::SnowShowers => "❄",
            Self::Thunderstorm => "🌩",
            Self::ThunderstormHail => "⛈",
            Self::Unknown => "?",
        }
    }
}

impl std::fmt::Display for ConditionCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Map a WMO weather code to its display category.
pub fn categorize(weather_code: i32) -> ConditionCategory {
    ConditionCategory::from_wmo_code(weather_code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ConditionCategory::*;

    const KNOWN: &[(i32, ConditionCategory)] = &[
        (0, Clear),
        (1, PartlyCloudy),
        (2, PartlyCloudy),
        (3, Overcast),
        (45, Fog),
        (48, Fog),
        (51, Drizzle),
        (53, Drizzle),
        (55, Drizzle),
        (56, FreezingDrizzle),
        (57, FreezingDrizzle),
        (61, Rain),
        (63, Rain),
        (65, Rain),
        (66, FreezingRain),
        (67, FreezingRain),
        (71, Snow),
        (73, Snow),
        (75, Snow),
        (77, SnowGrains),
        (80, RainShowers),
        (81, RainShowers),
        (82, RainShowers),
        (85, SnowShowers),
        (86, SnowShowers),
        (95, Thunderstorm),
        (96, ThunderstormHail),
        (99, ThunderstormHail),
    ];

    #[test]
    fn test_known_codes() {
        for &(code, expected) in KNOWN {
            assert_eq!(categorize(code), expected, "code {code}");
        }
    }

    #[test]
    fn test_every_other_code_in_range_is_unknown() {
        for code in -1..=150 {
            if KNOWN.iter().any(|&(known, _)| known == code) {
                continue;
            }
            assert_eq!(categorize(code), Unknown, "code {code}");
        }
    }

    #[test]
    fn test_gaps_between_clusters_are_unknown() {
        assert_eq!(categorize(4), Unknown);
        assert_eq!(categorize(50), Unknown);
        assert_eq!(categorize(90), Unknown);
        assert_eq!(categorize(97), Unknown);
    }

    #[test]
    fn test_out_of_range_codes() {
        assert_eq!(categorize(-1), Unknown);
        assert_eq!(categorize(150), Unknown);
        assert_eq!(categorize(200), Unknown);
        assert_eq!(categorize(i32::MIN), Unknown);
        assert_eq!(categorize(i32::MAX), Unknown);
    }

    #[test]
    fn test_named_scenarios() {
        assert_eq!(categorize(61), Rain);
        assert_eq!(categorize(96), ThunderstormHail);
        assert_eq!(categorize(200), Unknown);
    }

    #[test]
    fn test_label_and_icon() {
        assert_eq!(Clear.label(), "Clear");
        assert_eq!(ThunderstormHail.label(), "Thunderstorm with Hail");
        assert_eq!(Clear.icon_name(), "sun.max.fill");
        assert_eq!(ThunderstormHail.icon_name(), "cloud.bolt.rain");
        assert_eq!(Rain.to_string(), "Rain");
    }

    #[test]
    fn test_every_category_has_display_strings() {
        for &(_, category) in KNOWN.iter().chain(std::iter::once(&(0, Unknown))) {
            assert!(!category.label().is_empty());
            assert!(!category.icon_name().is_empty());
            assert!(!category.glyph().is_empty());
        }
    }
}
