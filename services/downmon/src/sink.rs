//! Notification sink trait for desktop alert channels

use std::time::Duration;

use async_trait::async_trait;

/// Destination for alert notifications.
///
/// Two independently enabled channels; each is best-effort, and a failure in
/// one must never affect the other.
#[async_trait]
#[cfg_attr(test, mockall::automock)]
pub trait NotificationSink: Send + Sync {
    /// Show a visual popup notification
    async fn popup(&self, title: &str, message: &str, timeout: Duration) -> crate::Result<()>;

    /// Play an audible alert
    async fn sound(&self) -> crate::Result<()>;
}
