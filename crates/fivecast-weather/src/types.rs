use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::condition::ConditionCategory;

/// Daily forecast entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyForecast {
    pub date: NaiveDate,
    pub weather_code: i32,
    pub temperature_max_f: f64,
    pub temperature_min_f: f64,
}

impl DailyForecast {
    pub fn condition(&self) -> ConditionCategory {
        ConditionCategory::from_wmo_code(self.weather_code)
    }
}

/// All days returned by one fetch, in API order
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ForecastResult {
    pub days: Vec<DailyForecast>,
}

impl ForecastResult {
    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DailyForecast> {
        self.days.iter()
    }
}

impl<'a> IntoIterator for &'a ForecastResult {
    type Item = &'a DailyForecast;
    type IntoIter = std::slice::Iter<'a, DailyForecast>;

    fn into_iter(self) -> Self::IntoIter {
        self.days.iter()
    }
}

/// Forecast fetch errors. Both kinds are terminal for the attempt.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// Transport failure or a status other than 200
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
    /// Body does not match the expected schema
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl FetchError {
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::InvalidResponse(_) => "Couldn't reach the weather service. Please try again.",
            Self::InvalidData(_) => "The weather service sent data we couldn't read.",
        }
    }
}
