//! Alert source trait for polling the incident API

use async_trait::async_trait;

use crate::alert::AlertBatch;

/// Trait for fetching the current alert batch from the incident API.
///
/// A fetch either yields a complete decoded batch or an error; transport
/// failures, non-2xx statuses, and malformed payloads never produce a
/// partial batch. Retries are the caller's responsibility.
#[async_trait]
pub trait AlertSource: Send + Sync {
    /// Fetch one batch of alerts
    async fn fetch(&self) -> crate::Result<AlertBatch>;
}
