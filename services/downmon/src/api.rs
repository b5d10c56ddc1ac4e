//! Downdetector API client

use std::sync::Arc;

use async_trait::async_trait;

use crate::alert::AlertBatch;
use crate::config::ApiConfig;
use crate::io::HttpClient;
use crate::source::AlertSource;

/// Client for the Downdetector incident API.
///
/// All endpoints are read-only GETs under a common base URL; authentication
/// is a bearer token carried by the underlying HTTP client.
pub struct DowndetectorApi {
    base_url: String,
    http: Arc<dyn HttpClient>,
}

impl std::fmt::Debug for DowndetectorApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DowndetectorApi")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl DowndetectorApi {
    pub fn new(config: &ApiConfig, http: Arc<dyn HttpClient>) -> Self {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        tracing::debug!("Created DowndetectorApi at {}", base_url);
        Self { base_url, http }
    }

    async fn request(&self, endpoint: &str) -> crate::Result<String> {
        let url = format!("{}/{}", self.base_url, endpoint);
        let response = self.http.get(&url).await?;

        if !(200..300).contains(&response.status) {
            return Err(crate::MonitorError::Api(format!(
                "{} returned status {}: {}",
                url, response.status, response.body
            )));
        }

        Ok(response.body)
    }

    async fn request_batch(&self, endpoint: &str) -> crate::Result<AlertBatch> {
        let body = self.request(endpoint).await?;
        let batch: AlertBatch = serde_json::from_str(&body)?;
        Ok(batch)
    }

    async fn request_value(&self, endpoint: &str) -> crate::Result<serde_json::Value> {
        let body = self.request(endpoint).await?;
        let value: serde_json::Value = serde_json::from_str(&body)?;
        Ok(value)
    }

    /// All currently active alerts
    pub async fn active_alerts(&self) -> crate::Result<AlertBatch> {
        self.request_batch("alerts").await
    }

    /// Active alerts filtered by the account's service subscriptions
    pub async fn filtered_alerts(&self) -> crate::Result<AlertBatch> {
        self.request_batch("alerts/filtered").await
    }

    /// Alerts for a single service
    pub async fn service_alerts(&self, service_name: &str) -> crate::Result<AlertBatch> {
        self.request_batch(&format!("service/{}/alerts", percent_encode(service_name)))
            .await
    }

    /// Current status of a single service
    pub async fn service_status(&self, service_name: &str) -> crate::Result<serde_json::Value> {
        self.request_value(&format!("service/{}/status", percent_encode(service_name)))
            .await
    }

    /// All services known to the API
    pub async fn services(&self) -> crate::Result<serde_json::Value> {
        self.request_value("services").await
    }

    /// All branches known to the API
    pub async fn branches(&self) -> crate::Result<serde_json::Value> {
        self.request_value("branches").await
    }
}

#[async_trait]
impl AlertSource for DowndetectorApi {
    async fn fetch(&self) -> crate::Result<AlertBatch> {
        self.filtered_alerts().await
    }
}

fn percent_encode(s: &str) -> String {
    s.bytes()
        .map(|b| match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                (b as char).to_string()
            }
            _ => format!("%{:02X}", b),
        })
        .collect()
}
