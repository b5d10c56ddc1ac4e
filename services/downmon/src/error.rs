//! Error types for the downmon service

/// Errors that can occur in the monitoring service
#[derive(Debug, thiserror::Error)]
pub enum MonitorError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Notification sink error: {0}")]
    Sink(String),
}

/// Result type alias for monitor operations
pub type Result<T> = std::result::Result<T, MonitorError>;
