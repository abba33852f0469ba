//! Fixed registry of forecast locations.

use fivecast_core::{ValidationResult, WeatherConfig};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The closed set of supported locations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LocationName {
    Lindenwold,
    Melbourne,
    Toronto,
}

impl LocationName {
    /// All locations, in menu order
    pub const ALL: [LocationName; 3] = [Self::Lindenwold, Self::Melbourne, Self::Toronto];

    /// Location used when a name is not recognized
    pub const DEFAULT: LocationName = Self::Lindenwold;

    /// Exact match against the canonical names. No trimming, no case folding.
    pub fn from_canonical(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|known| known.as_str() == name)
    }

    /// Canonical name, as accepted by [`lookup`]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lindenwold => "Lindenwold",
            Self::Melbourne => "Melbourne",
            Self::Toronto => "Toronto",
        }
    }

    pub fn location(&self) -> Location {
        match self {
            Self::Lindenwold => Location {
                name: *self,
                title: "Lindenwold, NJ",
                latitude: 39.8243,
                longitude: -74.9977,
                timezone: "America/New_York",
            },
            Self::Melbourne => Location {
                name: *self,
                title: "Melbourne, Victoria, Australia",
                latitude: -37.814,
                longitude: 144.9633,
                timezone: "auto",
            },
            Self::Toronto => Location {
                name: *self,
                title: "Toronto, Ontario, Canada",
                latitude: 43.7001,
                longitude: -79.4163,
                timezone: "auto",
            },
        }
    }
}

impl std::fmt::Display for LocationName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by the strict parse when a name is not in the registry
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown location '{0}' (expected one of: Lindenwold, Melbourne, Toronto)")]
pub struct UnknownLocation(pub String);

impl FromStr for LocationName {
    type Err = UnknownLocation;

    /// Forgiving parse for typed input: trims and ignores ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|name| name.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownLocation(s.to_string()))
    }
}

/// Geographic location with the timezone the API localizes dates to
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Location {
    pub name: LocationName,
    /// Human-readable title for menus
    pub title: &'static str,
    pub latitude: f64,
    pub longitude: f64,
    /// IANA identifier, or `auto` to let the API resolve it from coordinates
    pub timezone: &'static str,
}

/// Resolve a name to its location, falling back to [`LocationName::DEFAULT`].
///
/// Only the exact canonical spelling resolves; `"melbourne"` falls back.
pub fn lookup(name: &str) -> Location {
    match LocationName::from_canonical(name) {
        Some(known) => known.location(),
        None => {
            tracing::warn!(
                "{}; falling back to {}",
                UnknownLocation(name.to_string()),
                LocationName::DEFAULT
            );
            LocationName::DEFAULT.location()
        }
    }
}

/// Record a warning when `weather.default_location` would make [`lookup`] fall back.
///
/// An empty value is already reported by [`fivecast_core::Config::validate`].
pub fn validate_default_location(weather: &WeatherConfig, result: &mut ValidationResult) {
    let name = &weather.default_location;
    if name.trim().is_empty() || LocationName::from_canonical(name).is_some() {
        return;
    }

    result.add_warning(
        "weather.default_location",
        format!(
            "Unknown location '{}'; {} is used instead (expected one of: {})",
            name,
            LocationName::DEFAULT,
            names().join(", ")
        ),
    );
}

/// Canonical names for populating a selection menu
pub fn names() -> Vec<&'static str> {
    LocationName::ALL.iter().map(LocationName::as_str).collect()
}
