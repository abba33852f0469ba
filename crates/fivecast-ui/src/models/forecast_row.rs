use chrono::NaiveDate;
use fivecast_weather::{ConditionCategory, ForecastResult};

/// Display row for one forecast day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForecastRow {
    pub day_label: String,
    pub temperatures: String,
    pub condition: ConditionCategory,
}

/// "Today" for the first row, the full weekday name otherwise.
pub fn day_label(index: usize, date: NaiveDate) -> String {
    if index == 0 {
        "Today".to_string()
    } else {
        date.format("%A").to_string()
    }
}

/// `H: 55°  L: 38°`, rounded to the nearest whole degree.
pub fn temperature_text(max: f64, min: f64) -> String {
    format!("H: {}°  L: {}°", whole_degrees(max), whole_degrees(min))
}

// `as` saturates; -0.4 rounds to -0.0 which casts to 0.
fn whole_degrees(temperature: f64) -> i64 {
    temperature.round() as i64
}

pub fn rows(result: &ForecastResult) -> Vec<ForecastRow> {
    result
        .iter()
        .enumerate()
        .map(|(index, day)| ForecastRow {
            day_label: day_label(index, day.date),
            temperatures: temperature_text(day.temperature_max_f, day.temperature_min_f),
            condition: day.condition(),
        })
        .collect()
}
