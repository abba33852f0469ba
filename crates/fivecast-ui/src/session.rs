//! Interactive session: location names come in as lines, forecasts go out
//! as they arrive from the [`ForecastService`].

use std::io::{self, Write};

use fivecast_core::AppError;
use fivecast_weather::LocationName;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;

use crate::models::forecast_model::{FetchApplied, ForecastState};
use crate::models::forecast_row::rows;
use crate::render::{render_menu, render_table};
use crate::services::forecast_service::{ForecastService, ForecastServiceMessage};

/// How a forecast is written out
#[derive(Debug, Clone, Copy)]
pub struct Output {
    pub json: bool,
    pub show_label: bool,
}

impl Output {
    /// Render the last successful result, or `None` if there is nothing to show yet.
    pub fn render(&self, state: &ForecastState) -> serde_json::Result<Option<String>> {
        let (Some(result), Some(location)) = (state.last_result(), state.result_location())
        else {
            return Ok(None);
        };

        let text = if self.json {
            let mut json = serde_json::to_string_pretty(result)?;
            json.push('\n');
            json
        } else {
            render_table(location.location().title, &rows(result), self.show_label)
        };
        Ok(Some(text))
    }

    /// Write the last successful result to `out`, if any.
    pub fn write_to<W: Write>(&self, out: &mut W, state: &ForecastState) -> io::Result<()> {
        if let Some(text) = self.render(state)? {
            out.write_all(text.as_bytes())?;
            out.flush()?;
        }
        Ok(())
    }
}

/// Log `err` and write its user-facing message to `out`.
pub fn report_error<W: Write>(out: &mut W, err: &AppError) -> io::Result<()> {
    tracing::error!("{}", err);
    writeln!(out, "{}", err.user_message())
}

fn is_quit(input: &str) -> bool {
    input.eq_ignore_ascii_case("q") || input.eq_ignore_ascii_case("quit")
}

/// Run the interactive loop until the user quits or `input` ends.
///
/// Each recognized name selects that location and re-fetches. At end of
/// input the session keeps waiting until the fetch for the current
/// selection has reported, so piped input still gets its forecast.
/// Forecasts and the menu go to `out`; problems go to `err`.
pub async fn run_interactive<R, W, E>(
    mut state: ForecastState,
    service: &ForecastService,
    rx: &mut mpsc::UnboundedReceiver<ForecastServiceMessage>,
    input: R,
    out: &mut W,
    err: &mut E,
    output: Output,
) -> io::Result<ForecastState>
where
    R: AsyncBufRead + Unpin,
    W: Write,
    E: Write,
{
    service.request_fetch(state.current_location());
    let mut pending = true;

    write!(out, "{}", render_menu(&state.menu_items()))?;
    writeln!(out, "Type a location name to switch, or 'q' to quit.")?;
    out.flush()?;

    let mut lines = input.lines();
    let mut input_done = false;

    loop {
        tokio::select! {
            line = lines.next_line(), if !input_done => {
                match line? {
                    None => {
                        tracing::debug!("Input closed; waiting for pending fetch: {}", pending);
                        input_done = true;
                    }
                    Some(line) => {
                        let choice = line.trim();
                        if is_quit(choice) {
                            break;
                        }
                        if !choice.is_empty() {
                            match choice.parse::<LocationName>() {
                                Ok(name) if state.select(name) => {
                                    service.request_fetch(name);
                                    pending = true;
                                }
                                Ok(_) => output.write_to(out, &state)?,
                                Err(e) => {
                                    writeln!(err, "{}", e)?;
                                    write!(out, "{}", render_menu(&state.menu_items()))?;
                                    out.flush()?;
                                }
                            }
                        }
                    }
                }
            }
            Some(message) = rx.recv() => {
                let ForecastServiceMessage::FetchDone { location, result } = message;
                match state.apply_fetch(location, result) {
                    Ok(FetchApplied::Updated) => {
                        pending = false;
                        output.write_to(out, &state)?;
                    }
                    Ok(FetchApplied::Superseded) => {}
                    Err(e) => {
                        pending = false;
                        report_error(err, &AppError::from(e))?;
                        if let Some(shown) = state.result_location() {
                            writeln!(err, "Still showing the last forecast for {}.", shown)?;
                        }
                    }
                }
            }
            else => break,
        }

        if input_done && !pending {
            break;
        }
    }

    service.cancel_in_flight();
    Ok(state)
}
