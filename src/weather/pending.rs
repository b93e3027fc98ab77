//! Non-blocking handle around an in-flight weather lookup.
//!
//! The lookup runs on its own thread so entry creation never waits on it. An
//! entry created before the outcome arrives carries no weather, and the late
//! outcome is never attached to it.

use super::{resolve_weather, Coordinates, WeatherOutcome, WeatherProvider};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, TryRecvError};
use std::thread;
use std::time::Duration;
use tracing::debug;

/// A weather lookup that may or may not have finished.
pub struct PendingWeather {
    receiver: Receiver<WeatherOutcome>,
    outcome: Option<WeatherOutcome>,
}

impl PendingWeather {
    /// Starts the lookup on a worker thread.
    pub fn spawn<P>(provider: P, location: Option<Coordinates>) -> Self
    where
        P: WeatherProvider + Send + 'static,
    {
        let (sender, receiver) = mpsc::channel();
        thread::spawn(move || {
            let outcome = resolve_weather(&provider, location);
            // The receiver may already be gone; nobody is waiting then.
            let _ = sender.send(outcome);
        });

        Self {
            receiver,
            outcome: None,
        }
    }

    /// An already-resolved lookup.
    pub fn ready(outcome: WeatherOutcome) -> Self {
        let (_, receiver) = mpsc::channel();
        Self {
            receiver,
            outcome: Some(outcome),
        }
    }

    /// Returns the outcome if the lookup has finished, without blocking.
    pub fn poll(&mut self) -> Option<&WeatherOutcome> {
        if self.outcome.is_none() {
            match self.receiver.try_recv() {
                Ok(outcome) => self.outcome = Some(outcome),
                Err(TryRecvError::Empty) => {}
                Err(TryRecvError::Disconnected) => {
                    debug!("Weather worker exited without an outcome");
                }
            }
        }
        self.outcome.as_ref()
    }

    /// Waits at most `timeout` for the lookup to finish.
    pub fn wait(&mut self, timeout: Duration) -> Option<&WeatherOutcome> {
        if self.outcome.is_none() {
            match self.receiver.recv_timeout(timeout) {
                Ok(outcome) => self.outcome = Some(outcome),
                Err(RecvTimeoutError::Timeout) => {
                    debug!("Weather still pending after {:?}", timeout);
                }
                Err(RecvTimeoutError::Disconnected) => {
                    debug!("Weather worker exited without an outcome");
                }
            }
        }
        self.outcome.as_ref()
    }
}
