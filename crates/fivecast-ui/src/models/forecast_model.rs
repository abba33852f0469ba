//! Forecast screen state.
//!
//! Holds the selected location and the last successfully fetched result.
//! Callers thread it explicitly through selection, fetch completion and
//! rendering; there is no global instance.

use fivecast_weather::{FetchError, ForecastResult, Location, LocationName};

/// One entry of the location selection menu
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MenuItem {
    pub location: Location,
    pub is_selected: bool,
}

/// What `apply_fetch` did with a completed fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchApplied {
    /// The held result was replaced
    Updated,
    /// The fetch was for a location that is no longer selected; ignored
    Superseded,
}

#[derive(Debug, Clone)]
pub struct ForecastState {
    current_location: LocationName,
    last_result: Option<ForecastResult>,
    // Location `last_result` was fetched for; lags `current_location`
    // until the fetch for a new selection completes.
    result_location: Option<LocationName>,
}

impl ForecastState {
    pub fn new(initial: LocationName) -> Self {
        Self {
            current_location: initial,
            last_result: None,
            result_location: None,
        }
    }

    pub fn current_location(&self) -> LocationName {
        self.current_location
    }

    pub fn last_result(&self) -> Option<&ForecastResult> {
        self.last_result.as_ref()
    }

    pub fn result_location(&self) -> Option<LocationName> {
        self.result_location
    }

    /// True when the held result belongs to a previous selection.
    pub fn is_stale(&self) -> bool {
        self.result_location
            .is_some_and(|shown| shown != self.current_location)
    }

    /// Change the selection. Returns `true` if it changed, meaning the
    /// caller should start a fetch. The held result stays until then.
    pub fn select(&mut self, name: LocationName) -> bool {
        if self.current_location == name {
            return false;
        }
        tracing::info!("Location changed: {} -> {}", self.current_location, name);
        self.current_location = name;
        true
    }

    /// Menu entries in registry order, the current selection marked
    pub fn menu_items(&self) -> Vec<MenuItem> {
        LocationName::ALL
            .iter()
            .map(|name| MenuItem {
                location: name.location(),
                is_selected: *name == self.current_location,
            })
            .collect()
    }

    /// Record a completed fetch for `location`.
    ///
    /// A success for the current selection replaces the held result in full.
    /// Results for a superseded selection are dropped. On error the held
    /// result is left untouched and the error is handed back to the caller.
    pub fn apply_fetch(
        &mut self,
        location: LocationName,
        result: Result<ForecastResult, FetchError>,
    ) -> Result<FetchApplied, FetchError> {
        if location != self.current_location {
            tracing::debug!(
                "Dropping fetch for {} (current selection is {})",
                location,
                self.current_location
            );
            return Ok(FetchApplied::Superseded);
        }

        let forecast = result?;
        self.last_result = Some(forecast);
        self.result_location = Some(location);
        Ok(FetchApplied::Updated)
    }
}

impl Default for ForecastState {
    fn default() -> Self {
        Self::new(LocationName::DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use fivecast_weather::DailyForecast;

    fn forecast(max: f64) -> ForecastResult {
        ForecastResult {
            days: vec![DailyForecast {
                date: NaiveDate::from_ymd_opt(2024, 11, 26).unwrap(),
                weather_code: 0,
                temperature_max_f: max,
                temperature_min_f: 30.0,
            }],
        }
    }

    #[test]
    fn test_success_replaces_result() {
        let mut state = ForecastState::default();
        let applied = state
            .apply_fetch(LocationName::Lindenwold, Ok(forecast(50.0)))
            .unwrap();
        assert_eq!(applied, FetchApplied::Updated);

        state
            .apply_fetch(LocationName::Lindenwold, Ok(forecast(60.0)))
            .unwrap();
        assert_eq!(state.last_result(), Some(&forecast(60.0)));
    }

    #[test]
    fn test_error_leaves_previous_result_unchanged() {
        let mut state = ForecastState::default();
        state
            .apply_fetch(LocationName::Lindenwold, Ok(forecast(50.0)))
            .unwrap();

        let err = state
            .apply_fetch(
                LocationName::Lindenwold,
                Err(FetchError::InvalidResponse("HTTP 500".into())),
            )
            .unwrap_err();

        assert!(matches!(err, FetchError::InvalidResponse(_)));
        assert_eq!(state.last_result(), Some(&forecast(50.0)));
    }

    #[test]
    fn test_superseded_fetch_is_dropped() {
        let mut state = ForecastState::new(LocationName::Lindenwold);
        assert!(state.select(LocationName::Toronto));

        let applied = state
            .apply_fetch(LocationName::Lindenwold, Ok(forecast(50.0)))
            .unwrap();
        assert_eq!(applied, FetchApplied::Superseded);
        assert!(state.last_result().is_none());

        // Errors for a superseded selection are not surfaced either
        let applied = state
            .apply_fetch(
                LocationName::Lindenwold,
                Err(FetchError::InvalidData("x".into())),
            )
            .unwrap();
        assert_eq!(applied, FetchApplied::Superseded);
    }

    #[test]
    fn test_select_same_location_is_noop() {
        let mut state = ForecastState::new(LocationName::Melbourne);
        assert!(!state.select(LocationName::Melbourne));
        assert!(state.select(LocationName::Toronto));
        assert_eq!(state.current_location(), LocationName::Toronto);
    }

    #[test]
    fn test_stale_until_new_selection_loads() {
        let mut state = ForecastState::new(LocationName::Lindenwold);
        assert!(!state.is_stale());

        state
            .apply_fetch(LocationName::Lindenwold, Ok(forecast(50.0)))
            .unwrap();
        state.select(LocationName::Melbourne);
        assert!(state.is_stale());
        assert_eq!(state.result_location(), Some(LocationName::Lindenwold));

        state
            .apply_fetch(LocationName::Melbourne, Ok(forecast(80.0)))
            .unwrap();
        assert!(!state.is_stale());
    }

    #[test]
    fn test_menu_marks_exactly_the_selection() {
        let state = ForecastState::new(LocationName::Toronto);
        let items = state.menu_items();

        assert_eq!(items.len(), LocationName::ALL.len());
        let selected: Vec<_> = items.iter().filter(|i| i.is_selected).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].location.name, LocationName::Toronto);
        assert_eq!(items[0].location.name, LocationName::Lindenwold);
    }
}
