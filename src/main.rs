use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use fivecast_core::{AppError, Config, NetworkError, ReqwestErrorExt, WeatherConfig};
use fivecast_ui::{
    render_menu, report_error, run_interactive, ForecastService, ForecastState, Output,
};
use fivecast_weather::{lookup, validate_default_location, ForecastClient, LocationName};
use tokio::io::BufReader;

/// Daily forecast for a fixed set of locations
#[derive(Debug, Parser)]
#[command(name = "fivecast", version, about)]
struct Cli {
    /// Location to show (Lindenwold, Melbourne, Toronto)
    #[arg(short, long)]
    location: Option<String>,

    /// Number of forecast days to request
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=16))]
    days: Option<u32>,

    /// Print the forecast as JSON instead of a table
    #[arg(long)]
    json: bool,

    /// List the available locations and exit
    #[arg(long)]
    list: bool,

    /// Read location names from stdin and re-fetch on each selection
    #[arg(short, long)]
    interactive: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    fivecast_core::init()?;
    let (config, mut validation) = Config::load_validated().map_err(fail)?;
    let known_warnings = validation.warnings.len();
    validate_default_location(&config.weather, &mut validation);
    for warning in &validation.warnings[known_warnings..] {
        tracing::warn!("Config warning: {}", warning);
    }

    let initial = match &cli.location {
        Some(name) => name.parse::<LocationName>().map_err(fail)?,
        None => lookup(&config.weather.default_location).name,
    };
    let mut state = ForecastState::new(initial);

    if cli.list {
        print!("{}", render_menu(&state.menu_items()));
        return Ok(());
    }

    let client = build_client(&config.weather).map_err(fail)?;
    let days = cli.days.unwrap_or(config.weather.forecast_days);
    let output = Output {
        json: cli.json,
        show_label: config.ui.show_condition_label,
    };

    if cli.interactive {
        let (service, mut rx) =
            ForecastService::new(Arc::new(client), days, tokio::runtime::Handle::current());
        run_interactive(
            state,
            &service,
            &mut rx,
            BufReader::new(tokio::io::stdin()),
            &mut std::io::stdout(),
            &mut std::io::stderr(),
            output,
        )
        .await
        .map_err(fail)?;
        Ok(())
    } else {
        let location = state.current_location();
        let result = client.fetch_forecast(&location.location(), days).await;
        state.apply_fetch(location, result).map_err(fail)?;
        output
            .write_to(&mut std::io::stdout(), &state)
            .map_err(fail)?;
        Ok(())
    }
}

fn build_client(weather: &WeatherConfig) -> Result<ForecastClient, NetworkError> {
    ForecastClient::with_base_url(
        &weather.base_url,
        Duration::from_secs(weather.timeout_secs),
    )
    .map_err(|e| e.into_network_error())
}

/// Log the failure, tell the user, and hand it back for the exit status.
fn fail(err: impl Into<AppError>) -> anyhow::Error {
    let err = err.into();
    let _ = report_error(&mut std::io::stderr(), &err);
    err.into()
}
