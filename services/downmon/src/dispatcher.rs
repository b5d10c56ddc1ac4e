//! Alert deduplication and notification dispatch

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use crate::alert::{Alert, AlertBatch, AlertId};
use crate::config::NotificationSettings;
use crate::sink::NotificationSink;

/// Title used for every desktop notification
const ALERT_TITLE: &str = "Downdetector Alert";

/// How long a popup stays on screen
const POPUP_TIMEOUT: Duration = Duration::from_secs(10);

/// Deduplicates alerts and dispatches notifications for novel ones.
///
/// Holds the set of already-notified alert ids for the lifetime of the
/// process. An id is recorded before the notification attempt, so a failing
/// sink can never cause a duplicate notification in a later cycle.
pub struct AlertDispatcher {
    seen: HashSet<AlertId>,
    settings: NotificationSettings,
    sink: Arc<dyn NotificationSink>,
}

impl AlertDispatcher {
    pub fn new(settings: NotificationSettings, sink: Arc<dyn NotificationSink>) -> Self {
        Self {
            seen: HashSet::new(),
            settings,
            sink,
        }
    }

    /// Number of distinct alerts notified so far
    pub fn seen_count(&self) -> usize {
        self.seen.len()
    }

    /// Process one batch, notifying once for each alert not seen before.
    ///
    /// Failed batches and batches without an alert sequence are ignored.
    /// Alerts without a usable id are skipped and never recorded.
    pub async fn process(&mut self, batch: &AlertBatch) {
        if !batch.success {
            return;
        }
        let Some(alerts) = &batch.data else {
            return;
        };

        for alert in alerts {
            let id = match &alert.id {
                Some(id) if !id.is_empty() => id.clone(),
                _ => {
                    tracing::debug!("Skipping alert without id for '{}'", alert.service);
                    continue;
                }
            };

            if !self.seen.insert(id.clone()) {
                continue;
            }

            tracing::debug!("New alert {} for '{}'", id, alert.service);
            let message = format_message(alert);
            self.notify(ALERT_TITLE, &message).await;
        }
    }

    /// Send one notification through the enabled channels.
    ///
    /// Each channel is attempted independently; a failure is logged and does
    /// not suppress the other channel.
    async fn notify(&self, title: &str, message: &str) {
        if self.settings.popup_alerts {
            if let Err(e) = self.sink.popup(title, message, POPUP_TIMEOUT).await {
                tracing::error!("Failed to show notification: {}", e);
            }
        }

        if self.settings.alert_sound {
            if let Err(e) = self.sink.sound().await {
                tracing::error!("Failed to play alert sound: {}", e);
            }
        }

        tracing::info!("ALERT: {} - {}", title, message);
    }
}

/// Format the human-readable notification body for one alert
pub fn format_message(alert: &Alert) -> String {
    let mut message = format!(
        "Service: {}\nType: {}\nTime: {}",
        alert.service, alert.kind, alert.time
    );

    match alert.kind.as_str() {
        "complaints" => message.push_str(&format!("\nComplaints: {}", alert.num)),
        "url" => message.push_str(&format!("\nURL: {}", alert.url)),
        "latency" => message.push_str(&format!(
            "\nProvider: {}\nPlace: {}",
            alert.provider, alert.place
        )),
        _ => {}
    }

    message
}
