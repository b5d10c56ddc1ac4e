//! Downmon - Downdetector incident monitoring and notification service
//!
//! Polls the Downdetector API for incident alerts, deduplicates them, and
//! raises desktop notifications for new ones.

pub mod alert;
pub mod api;
pub mod config;
pub mod desktop;
pub mod dispatcher;
pub mod engine;
pub mod error;
pub mod io;
pub mod sink;
pub mod source;

pub use config::{load_config, save_config, Config};
pub use error::{MonitorError, Result};

use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::api::DowndetectorApi;
use crate::desktop::DesktopSink;
use crate::dispatcher::AlertDispatcher;
use crate::engine::PollLoop;
use crate::io::ReqwestHttpClient;

/// Run the monitoring service with the given configuration
pub async fn run(config: Config) -> Result<()> {
    let http: Arc<dyn io::HttpClient> =
        Arc::new(ReqwestHttpClient::with_bearer(&config.api.token)?);
    let cancel = CancellationToken::new();

    let source: Arc<dyn source::AlertSource> =
        Arc::new(DowndetectorApi::new(&config.api, Arc::clone(&http)));
    let sink: Arc<dyn sink::NotificationSink> = Arc::new(DesktopSink);
    let dispatcher = AlertDispatcher::new(config.notifications, sink);

    let interval = Duration::from_secs(config.api.poll_interval);
    let poll_loop = PollLoop::new(source, dispatcher, interval, cancel.clone());

    // Setup shutdown handler
    let cancel_for_signal = cancel.clone();
    tokio::spawn(async move {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to listen for ctrl-c");
        tracing::info!("Monitoring stopped by user");
        cancel_for_signal.cancel();
    });

    tracing::info!("Starting Downdetector Monitor...");

    // Runs until cancelled
    poll_loop.run().await;

    tracing::info!("Downdetector Monitor stopped");

    Ok(())
}
