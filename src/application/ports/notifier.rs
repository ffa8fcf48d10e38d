//! Notification port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::notification::{DeliveryTime, NotificationId, NotificationRequest};

/// Notification errors
///
/// The underlying OS surface owns failure semantics; service errors carry its
/// message unmodified.
#[derive(Debug, Clone, Error)]
pub enum NotificationError {
    #[error("OS notification service error: {0}")]
    Service(String),

    #[error("{operation} is not supported by this backend")]
    Unsupported { operation: &'static str },
}

/// Port for the OS local-notification surface.
///
/// Each call is stateless and independent; the OS owns all persistent
/// notification state.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Submit a toast for immediate presentation.
    async fn show(&self, request: &NotificationRequest) -> Result<(), NotificationError>;

    /// Submit a toast to the OS schedule for delivery at the given time.
    /// The scheduled entry is tagged with the request's stringified id so it
    /// can later be located for cancellation.
    async fn schedule(
        &self,
        request: &NotificationRequest,
        delivery: DeliveryTime,
    ) -> Result<(), NotificationError>;

    /// Update the application badge to the exact count given.
    /// No bounds checking; zero and negative values pass through.
    async fn set_badge(&self, count: i32) -> Result<(), NotificationError>;

    /// Remove the scheduled notification tagged with `id`, if one exists.
    /// Unknown ids are silently ignored.
    async fn cancel(&self, id: NotificationId) -> Result<(), NotificationError>;
}

/// Blanket implementation for boxed notifier types
#[async_trait]
impl Notifier for Box<dyn Notifier> {
    async fn show(&self, request: &NotificationRequest) -> Result<(), NotificationError> {
        self.as_ref().show(request).await
    }

    async fn schedule(
        &self,
        request: &NotificationRequest,
        delivery: DeliveryTime,
    ) -> Result<(), NotificationError> {
        self.as_ref().schedule(request, delivery).await
    }

    async fn set_badge(&self, count: i32) -> Result<(), NotificationError> {
        self.as_ref().set_badge(count).await
    }

    async fn cancel(&self, id: NotificationId) -> Result<(), NotificationError> {
        self.as_ref().cancel(id).await
    }
}
