//! Cross-platform notification adapter using notify-rust
//!
//! Covers immediate display on Windows, macOS, and Linux. The freedesktop
//! surface has no application schedule or badge counter, so those operations
//! report as unsupported; cancel is a no-op since nothing is ever tagged.

use async_trait::async_trait;

use crate::application::ports::{NotificationError, Notifier};
use crate::domain::config::DEFAULT_APP_NAME;
use crate::domain::notification::{DeliveryTime, NotificationId, NotificationRequest};

/// Cross-platform notifier using notify-rust
pub struct NotifyRustNotifier {
    /// Application name for notifications
    app_name: String,
}

impl NotifyRustNotifier {
    /// Create a new notify-rust notifier
    pub fn new() -> Self {
        Self {
            app_name: DEFAULT_APP_NAME.to_string(),
        }
    }

    /// Create with custom app name
    pub fn with_app_name(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
        }
    }
}

impl Default for NotifyRustNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Notifier for NotifyRustNotifier {
    async fn show(&self, request: &NotificationRequest) -> Result<(), NotificationError> {
        let title = request.title().to_owned();
        let body = request.body().to_owned();
        let app_name = self.app_name.clone();

        // notify-rust operations can block, so run in spawn_blocking
        tokio::task::spawn_blocking(move || {
            notify_rust::Notification::new()
                .appname(&app_name)
                .summary(&title)
                .body(&body)
                .show()
                .map(|_| ())
                .map_err(|e| NotificationError::Service(e.to_string()))
        })
        .await
        .map_err(|e| NotificationError::Service(format!("Task join error: {}", e)))?
    }

    async fn schedule(
        &self,
        _request: &NotificationRequest,
        _delivery: DeliveryTime,
    ) -> Result<(), NotificationError> {
        Err(NotificationError::Unsupported {
            operation: "Scheduled notifications",
        })
    }

    async fn set_badge(&self, _count: i32) -> Result<(), NotificationError> {
        Err(NotificationError::Unsupported {
            operation: "Badge counters",
        })
    }

    async fn cancel(&self, _id: NotificationId) -> Result<(), NotificationError> {
        // Nothing is ever scheduled on this backend, so there is never a
        // matching tag. Unknown ids are silently ignored.
        Ok(())
    }
}
