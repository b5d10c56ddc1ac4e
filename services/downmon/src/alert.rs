//! Alert data model for Downdetector API payloads

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of an alert, stable across polls for the same incident.
///
/// The API reports ids as either integers or strings; both forms are
/// accepted and kept distinct.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AlertId {
    Int(i64),
    Text(String),
}

impl AlertId {
    /// An empty string cannot identify an incident
    pub fn is_empty(&self) -> bool {
        matches!(self, AlertId::Text(s) if s.is_empty())
    }
}

impl fmt::Display for AlertId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlertId::Int(n) => write!(f, "{}", n),
            AlertId::Text(s) => write!(f, "{}", s),
        }
    }
}

/// One reported incident
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    #[serde(default)]
    pub id: Option<AlertId>,
    /// Alert category; `complaints`, `url`, and `latency` carry extra fields
    #[serde(rename = "type", default = "default_kind")]
    pub kind: String,
    #[serde(default = "default_service")]
    pub service: String,
    /// Timestamp as reported by the API; displayed, never parsed
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub num: u64,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub provider: String,
    #[serde(default)]
    pub place: String,
}

/// Result of one fetch from the API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertBatch {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Option<Vec<Alert>>,
}

fn default_kind() -> String {
    "Unknown".to_string()
}

fn default_service() -> String {
    "Unknown service".to_string()
}
