//! Forecast backend: async forecast fetching.
//! Network work runs on the Tokio runtime; results are sent over an mpsc channel.

use std::sync::Arc;

use fivecast_weather::{FetchError, ForecastClient, ForecastResult, LocationName};
use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Messages sent from async operations back to the consumer
#[derive(Debug)]
pub enum ForecastServiceMessage {
    /// Result of fetching the forecast for `location`
    FetchDone {
        location: LocationName,
        result: Result<ForecastResult, FetchError>,
    },
}

pub struct ForecastService {
    client: Arc<ForecastClient>,
    forecast_days: u32,
    runtime: Handle,
    tx: mpsc::UnboundedSender<ForecastServiceMessage>,
    in_flight: Mutex<Option<CancellationToken>>,
}

impl ForecastService {
    /// Create the service and the receiving end of its message channel.
    pub fn new(
        client: Arc<ForecastClient>,
        forecast_days: u32,
        runtime: Handle,
    ) -> (Self, mpsc::UnboundedReceiver<ForecastServiceMessage>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let service = Self {
            client,
            forecast_days,
            runtime,
            tx,
            in_flight: Mutex::new(None),
        };
        (service, rx)
    }

    /// Request a fetch for `location`. Sends `FetchDone` when complete.
    ///
    /// A request still in flight is cancelled and never reports.
    pub fn request_fetch(&self, location: LocationName) -> JoinHandle<()> {
        let token = CancellationToken::new();
        if let Some(previous) = self.in_flight.lock().replace(token.clone()) {
            previous.cancel();
        }

        let client = self.client.clone();
        let tx = self.tx.clone();
        let forecast_days = self.forecast_days;

        self.runtime.spawn(async move {
            let target = location.location();
            tokio::select! {
                _ = token.cancelled() => {
                    tracing::debug!("Fetch for {} superseded", location);
                }
                result = client.fetch_forecast(&target, forecast_days) => {
                    if let Err(e) = &result {
                        tracing::error!("Failed to fetch forecast for {}: {}", location, e);
                    }
                    let _ = tx.send(ForecastServiceMessage::FetchDone { location, result });
                }
            }
        })
    }

    /// Cancel the in-flight request, if any.
    pub fn cancel_in_flight(&self) {
        if let Some(token) = self.in_flight.lock().take() {
            token.cancel();
        }
    }
}
