pub mod forecast_model;
pub mod forecast_row;
