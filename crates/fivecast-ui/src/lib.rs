//! Terminal presentation for Fivecast: explicit forecast state, row
//! formatting, the location menu, the background fetch service and the
//! interactive session that ties them together.

pub mod models;
pub mod render;
pub mod services;
pub mod session;

pub use models::forecast_model::{FetchApplied, ForecastState, MenuItem};
pub use models::forecast_row::{day_label, rows, temperature_text, ForecastRow};
pub use render::{render_menu, render_table};
pub use services::forecast_service::{ForecastService, ForecastServiceMessage};
pub use session::{report_error, run_interactive, Output};
