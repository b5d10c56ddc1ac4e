//! Desktop notification sink: OS popup and audible bell

use std::io::Write;
use std::time::Duration;

use async_trait::async_trait;

use crate::sink::NotificationSink;

/// Sink that raises OS-level popups and rings the terminal bell
#[derive(Debug, Default)]
pub struct DesktopSink;

#[async_trait]
impl NotificationSink for DesktopSink {
    async fn popup(&self, title: &str, message: &str, timeout: Duration) -> crate::Result<()> {
        notify_rust::Notification::new()
            .summary(title)
            .body(message)
            .timeout(notify_rust::Timeout::Milliseconds(timeout.as_millis() as u32))
            .show()
            .map_err(|e| crate::MonitorError::Sink(format!("Popup failed: {}", e)))?;
        Ok(())
    }

    async fn sound(&self) -> crate::Result<()> {
        // BEL makes most terminals emit an audible beep or visual bell
        let mut stdout = std::io::stdout();
        stdout
            .write_all(b"\x07")
            .and_then(|()| stdout.flush())
            .map_err(|e| crate::MonitorError::Sink(format!("Bell failed: {}", e)))?;
        Ok(())
    }
}
