//! Daily forecasts for a fixed set of locations
//!
//! Fetches from the Open-Meteo forecast API and maps WMO weather codes
//! to display categories.

pub mod condition;
mod error_mapping;
pub mod location;
pub mod provider;
pub mod types;

pub use condition::{categorize, ConditionCategory};
pub use location::{
    lookup, names, validate_default_location, Location, LocationName, UnknownLocation,
};
pub use provider::{decode_forecast, ForecastClient, DEFAULT_TIMEOUT};
pub use types::{DailyForecast, FetchError, ForecastResult};
