//! Outbox runner — drains the outbox on a poll interval and on demand.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{watch, Notify};
use tokio::time;
use tracing::{error, info};

use skillboard_core::config::worker::WorkerConfig;

use crate::dispatcher::OutboxDispatcher;

/// Polling loop around the [`OutboxDispatcher`].
///
/// Wakes on whichever comes first: the poll interval, or a nudge from a
/// service that just staged entries.
#[derive(Debug)]
pub struct OutboxRunner {
    dispatcher: Arc<OutboxDispatcher>,
    config: WorkerConfig,
    signal: Arc<Notify>,
}

impl OutboxRunner {
    /// Creates a new runner.
    pub fn new(dispatcher: Arc<OutboxDispatcher>, config: WorkerConfig, signal: Arc<Notify>) -> Self {
        Self {
            dispatcher,
            config,
            signal,
        }
    }

    /// Runs until the cancel signal flips to `true`, then drains one final
    /// time so staged entries are not stranded by shutdown.
    pub async fn run(&self, mut cancel: watch::Receiver<bool>) {
        info!(
            poll_interval = self.config.poll_interval_seconds,
            "Outbox runner started"
        );

        let poll_interval = Duration::from_secs(self.config.poll_interval_seconds);

        loop {
            tokio::select! {
                _ = cancel.changed() => {
                    if *cancel.borrow() {
                        info!("Outbox runner received shutdown signal");
                        break;
                    }
                }
                _ = self.signal.notified() => {}
                _ = time::sleep(poll_interval) => {}
            }

            if let Err(e) = self.dispatcher.drain().await {
                error!(error = %e, "Outbox drain failed");
            }
        }

        if let Err(e) = self.dispatcher.drain().await {
            error!(error = %e, "Final outbox drain failed");
        }

        info!("Outbox runner stopped");
    }
}
