//! Open-Meteo daily forecast client.

use std::time::Duration;

use chrono::NaiveDate;
use fivecast_core::ReqwestErrorExt;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::instrument;

use crate::location::Location;
use crate::types::{DailyForecast, FetchError, ForecastResult};

pub const FORECAST_API_BASE: &str = "https://api.open-meteo.com/v1/forecast";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const DAILY_METRICS: &str = "weather_code,temperature_2m_max,temperature_2m_min";
const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    daily: DailySeries,
}

/// Parallel arrays, one entry per day
#[derive(Debug, Deserialize)]
struct DailySeries {
    time: Vec<String>,
    weather_code: Vec<i32>,
    temperature_2m_max: Vec<f64>,
    temperature_2m_min: Vec<f64>,
}

impl DailySeries {
    fn into_forecast(self) -> Result<ForecastResult, FetchError> {
        let len = self.time.len();
        if self.weather_code.len() != len
            || self.temperature_2m_max.len() != len
            || self.temperature_2m_min.len() != len
        {
            let message = format!(
                "daily series lengths differ: time={}, weather_code={}, temperature_2m_max={}, temperature_2m_min={}",
                len,
                self.weather_code.len(),
                self.temperature_2m_max.len(),
                self.temperature_2m_min.len(),
            );
            tracing::error!("{}", message);
            return Err(FetchError::InvalidData(message));
        }

        let days = self
            .time
            .into_iter()
            .zip(self.weather_code)
            .zip(self.temperature_2m_max)
            .zip(self.temperature_2m_min)
            .map(|(((time, weather_code), max), min)| {
                let date = NaiveDate::parse_from_str(&time, DATE_FORMAT).map_err(|e| {
                    tracing::error!("Bad forecast date {:?}: {}", time, e);
                    FetchError::InvalidData(format!("invalid date '{}': {}", time, e))
                })?;
                Ok(DailyForecast {
                    date,
                    weather_code,
                    temperature_max_f: max,
                    temperature_min_f: min,
                })
            })
            .collect::<Result<Vec<_>, FetchError>>()?;

        Ok(ForecastResult { days })
    }
}

/// Decode a forecast response body.
///
/// Fails with [`FetchError::InvalidData`] on any schema mismatch, including
/// daily series of unequal length. Never truncates.
pub fn decode_forecast(body: &[u8]) -> Result<ForecastResult, FetchError> {
    let response: ForecastResponse = serde_json::from_slice(body).map_err(|e| {
        tracing::error!("Failed to decode forecast response: {}", e);
        FetchError::InvalidData(format!("JSON parse error: {}", e))
    })?;

    response.daily.into_forecast()
}

#[derive(Debug, Clone)]
pub struct ForecastClient {
    client: Client,
    base_url: String,
}

impl ForecastClient {
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        Self::with_base_url(FORECAST_API_BASE, timeout)
    }

    /// Target another forecast endpoint (self-hosted instance, test server).
    pub fn with_base_url(base_url: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Request URL for `location`. The timezone is percent-encoded.
    pub fn forecast_url(&self, location: &Location, forecast_days: u32) -> String {
        format!(
            "{}?latitude={}&longitude={}&daily={}&temperature_unit=fahrenheit&timezone={}&forecast_days={}",
            self.base_url,
            location.latitude,
            location.longitude,
            DAILY_METRICS,
            urlencoding::encode(location.timezone),
            forecast_days,
        )
    }

    /// Fetch the daily forecast for `location`.
    ///
    /// One GET per call, no caching and no retry. Anything but HTTP 200 is
    /// [`FetchError::InvalidResponse`].
    #[instrument(skip(self, location), fields(location_name = %location.name), level = "info")]
    pub async fn fetch_forecast(
        &self,
        location: &Location,
        forecast_days: u32,
    ) -> Result<ForecastResult, FetchError> {
        let url = self.forecast_url(location, forecast_days);
        tracing::debug!("GET {}", url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            let e = e.into_network_error();
            tracing::warn!("Forecast request failed: {}", e);
            FetchError::InvalidResponse(e.to_string())
        })?;

        let status = response.status();
        if status != StatusCode::OK {
            tracing::warn!("Forecast API returned status {}", status);
            return Err(FetchError::InvalidResponse(format!("HTTP {}", status)));
        }

        let body = response.bytes().await.map_err(|e| {
            let e = e.into_network_error();
            tracing::warn!("Failed to read forecast body: {}", e);
            FetchError::InvalidResponse(e.to_string())
        })?;

        let result = decode_forecast(&body)?;
        tracing::info!("Fetched {} forecast days", result.len());
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::LocationName;

    fn body(value: serde_json::Value) -> Vec<u8> {
        serde_json::to_vec(&value).unwrap()
    }

    #[test]
    fn test_forecast_url_encodes_timezone() {
        let client = ForecastClient::new(DEFAULT_TIMEOUT).unwrap();
        let url = client.forecast_url(&LocationName::Lindenwold.location(), 5);
        assert_eq!(
            url,
            "https://api.open-meteo.com/v1/forecast?latitude=39.8243&longitude=-74.9977\
             &daily=weather_code,temperature_2m_max,temperature_2m_min\
             &temperature_unit=fahrenheit&timezone=America%2FNew_York&forecast_days=5"
        );
    }

    #[test]
    fn test_forecast_url_auto_timezone_and_southern_latitude() {
        let client = ForecastClient::with_base_url("http://localhost:8080/", DEFAULT_TIMEOUT).unwrap();
        let url = client.forecast_url(&LocationName::Melbourne.location(), 7);
        assert!(url.starts_with("http://localhost:8080?latitude=-37.814&longitude=144.9633"));
        assert!(url.contains("&timezone=auto&"));
        assert!(url.ends_with("&forecast_days=7"));
    }

    #[test]
    fn test_decode_zips_positionally() {
        let result = decode_forecast(&body(serde_json::json!({
            "daily": {
                "time": ["2024-11-26", "2024-11-27"],
                "weather_code": [3, 61],
                "temperature_2m_max": [52.3, 48.9],
                "temperature_2m_min": [35.1, 40.0]
            }
        })))
        .unwrap();

        assert_eq!(result.len(), 2);
        assert_eq!(result.days[1].date, NaiveDate::from_ymd_opt(2024, 11, 27).unwrap());
        assert_eq!(result.days[1].weather_code, 61);
        assert_eq!(result.days[1].temperature_max_f, 48.9);
        assert_eq!(result.days[1].temperature_min_f, 40.0);
    }

    #[test]
    fn test_decode_ignores_extra_fields() {
        let result = decode_forecast(&body(serde_json::json!({
            "latitude": 39.82,
            "timezone": "America/New_York",
            "daily_units": { "temperature_2m_max": "°F" },
            "daily": {
                "time": ["2024-11-26"],
                "weather_code": [0],
                "temperature_2m_max": [60],
                "temperature_2m_min": [41]
            }
        })))
        .unwrap();

        assert_eq!(result.days[0].temperature_max_f, 60.0);
    }

    #[test]
    fn test_decode_accepts_empty_series() {
        let result = decode_forecast(&body(serde_json::json!({
            "daily": {
                "time": [],
                "weather_code": [],
                "temperature_2m_max": [],
                "temperature_2m_min": []
            }
        })))
        .unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_decode_rejects_length_mismatch() {
        let err = decode_forecast(&body(serde_json::json!({
            "daily": {
                "time": ["2024-11-26", "2024-11-27"],
                "weather_code": [3, 61],
                "temperature_2m_max": [52.3, 48.9],
                "temperature_2m_min": [35.1]
            }
        })))
        .unwrap_err();

        assert!(matches!(err, FetchError::InvalidData(ref m) if m.contains("temperature_2m_min=1")));
    }

    #[test]
    fn test_decode_rejects_missing_field() {
        let err = decode_forecast(&body(serde_json::json!({
            "daily": {
                "time": ["2024-11-26"],
                "weather_code": [3],
                "temperature_2m_max": [52.3]
            }
        })))
        .unwrap_err();

        assert!(matches!(err, FetchError::InvalidData(ref m) if m.contains("temperature_2m_min")));
    }

    #[test]
    fn test_decode_rejects_wrong_type_and_nulls() {
        let wrong_type = decode_forecast(&body(serde_json::json!({
            "daily": {
                "time": ["2024-11-26"],
                "weather_code": ["rain"],
                "temperature_2m_max": [52.3],
                "temperature_2m_min": [35.1]
            }
        })));
        assert!(matches!(wrong_type, Err(FetchError::InvalidData(_))));

        let null_temp = decode_forecast(&body(serde_json::json!({
            "daily": {
                "time": ["2024-11-26"],
                "weather_code": [3],
                "temperature_2m_max": [null],
                "temperature_2m_min": [35.1]
            }
        })));
        assert!(matches!(null_temp, Err(FetchError::InvalidData(_))));
    }

    #[test]
    fn test_decode_rejects_bad_date() {
        let err = decode_forecast(&body(serde_json::json!({
            "daily": {
                "time": ["2024-11-26T00:00"],
                "weather_code": [3],
                "temperature_2m_max": [52.3],
                "temperature_2m_min": [35.1]
            }
        })))
        .unwrap_err();

        assert!(matches!(err, FetchError::InvalidData(ref m) if m.contains("invalid date")));
    }

    #[test]
    fn test_decode_rejects_non_json() {
        let err = decode_forecast(b"<html>Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, FetchError::InvalidData(ref m) if m.starts_with("JSON parse error")));
    }
}
