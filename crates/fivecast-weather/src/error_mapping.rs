//! Maps weather errors to fivecast_core::AppError for consistent user-facing messages.

use fivecast_core::{AppError, WeatherError};

use crate::location::UnknownLocation;
use crate::types::FetchError;

impl From<FetchError> for WeatherError {
    fn from(e: FetchError) -> Self {
        match e {
            FetchError::InvalidResponse(s) => WeatherError::InvalidResponse(s),
            FetchError::InvalidData(s) => WeatherError::InvalidData(s),
        }
    }
}

impl From<FetchError> for AppError {
    fn from(e: FetchError) -> Self {
        AppError::Weather(e.into())
    }
}

impl From<UnknownLocation> for AppError {
    fn from(e: UnknownLocation) -> Self {
        AppError::Weather(WeatherError::UnknownLocation(e.0))
    }
}
