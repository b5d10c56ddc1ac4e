//! Poll loop driving fetch and dispatch cycles

use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::dispatcher::AlertDispatcher;
use crate::source::AlertSource;

/// Drives fetch -> process cycles on a fixed interval until cancelled.
///
/// Cycles run sequentially on one task and never overlap. Cancellation is
/// observed between cycles: an in-flight fetch is allowed to finish, and the
/// loop ends before the next one starts.
pub struct PollLoop {
    source: Arc<dyn AlertSource>,
    dispatcher: AlertDispatcher,
    interval: Duration,
    cancel: CancellationToken,
}

impl PollLoop {
    pub fn new(
        source: Arc<dyn AlertSource>,
        dispatcher: AlertDispatcher,
        interval: Duration,
        cancel: CancellationToken,
    ) -> Self {
        Self {
            source,
            dispatcher,
            interval,
            cancel,
        }
    }

    /// Run cycles until the cancellation token fires.
    ///
    /// A failed cycle (fetch error or unsuccessful batch) is logged and
    /// skipped; it never ends the loop.
    pub async fn run(mut self) {
        loop {
            match self.source.fetch().await {
                Ok(batch) if batch.success => {
                    self.dispatcher.process(&batch).await;
                }
                Ok(_) => {
                    tracing::error!("Failed to get alerts or no data received");
                }
                Err(e) => {
                    tracing::error!("API request failed: {}", e);
                }
            }

            tokio::select! {
                _ = tokio::time::sleep(self.interval) => {}
                _ = self.cancel.cancelled() => {
                    tracing::debug!("Poll loop cancelled");
                    break;
                }
            }
        }
    }
}
