//! Notification dispatch service
//!
//! The uniform surface the application layer calls without branching on
//! platform. Every operation is a one-to-one forward to the notifier port;
//! the only work done here is resolving the effective delivery time for
//! scheduled shows.

use std::time::SystemTime;

use crate::domain::notification::{DeliveryTime, NotificationId, NotificationRequest};

use super::ports::{NotificationError, Notifier};

/// Uniform notification surface over a single backend
pub struct NotificationService<N: Notifier> {
    notifier: N,
}

impl<N: Notifier> NotificationService<N> {
    /// Create a new service over the given backend
    pub fn new(notifier: N) -> Self {
        Self { notifier }
    }

    /// Show a notification immediately
    pub async fn show(&self, request: &NotificationRequest) -> Result<(), NotificationError> {
        self.notifier.show(request).await
    }

    /// Show a notification at the given time.
    /// A time at or before "now" is clamped forward so the OS scheduler
    /// accepts it.
    pub async fn show_at(
        &self,
        request: &NotificationRequest,
        when: SystemTime,
    ) -> Result<(), NotificationError> {
        self.notifier.schedule(request, DeliveryTime::at(when)).await
    }

    /// Show a notification with an already-resolved delivery time
    pub async fn show_scheduled(
        &self,
        request: &NotificationRequest,
        delivery: DeliveryTime,
    ) -> Result<(), NotificationError> {
        self.notifier.schedule(request, delivery).await
    }

    /// Set the application badge counter
    pub async fn set_badge(&self, count: i32) -> Result<(), NotificationError> {
        self.notifier.set_badge(count).await
    }

    /// Cancel the scheduled notification with the given id, if any
    pub async fn cancel(&self, id: NotificationId) -> Result<(), NotificationError> {
        self.notifier.cancel(id).await
    }

    /// Access the underlying notifier
    pub fn notifier(&self) -> &N {
        &self.notifier
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration as StdDuration;

    use super::*;
    use crate::infrastructure::notification::MemoryNotifier;

    fn service() -> NotificationService<MemoryNotifier> {
        NotificationService::new(MemoryNotifier::new())
    }

    #[tokio::test]
    async fn show_records_payload() {
        let svc = service();
        let req = NotificationRequest::new("Title", "Body").with_id(1);
        svc.show(&req).await.unwrap();

        let shown = svc.notifier().shown();
        assert_eq!(shown.len(), 1);
        assert!(shown[0].as_xml().contains("<text id=\"1\">Title</text>"));
    }

    #[tokio::test]
    async fn show_at_past_time_is_clamped() {
        let svc = service();
        let req = NotificationRequest::new("T", "B").with_id(2);
        let before = SystemTime::now();
        svc.show_at(&req, before - StdDuration::from_secs(30))
            .await
            .unwrap();

        let scheduled = svc.notifier().scheduled();
        assert_eq!(scheduled.len(), 1);
        // Effective time moved forward of the original request
        assert!(scheduled[0].delivery > before);
    }

    #[tokio::test]
    async fn show_at_future_time_passes_through() {
        let svc = service();
        let req = NotificationRequest::new("T", "B").with_id(3);
        let when = SystemTime::now() + StdDuration::from_secs(600);
        svc.show_at(&req, when).await.unwrap();

        let scheduled = svc.notifier().scheduled();
        assert_eq!(scheduled[0].delivery, when);
        assert_eq!(scheduled[0].tag, "3");
    }

    #[tokio::test]
    async fn cancel_removes_matching_entry() {
        let svc = service();
        let when = SystemTime::now() + StdDuration::from_secs(60);
        svc.show_at(&NotificationRequest::new("A", "a").with_id(10), when)
            .await
            .unwrap();
        svc.show_at(&NotificationRequest::new("B", "b").with_id(11), when)
            .await
            .unwrap();

        svc.cancel(NotificationId::new(10)).await.unwrap();

        let scheduled = svc.notifier().scheduled();
        assert_eq!(scheduled.len(), 1);
        assert!(scheduled.iter().all(|entry| entry.tag != "10"));
    }

    #[tokio::test]
    async fn cancel_unknown_id_is_silent() {
        let svc = service();
        svc.cancel(NotificationId::new(404)).await.unwrap();
    }

    #[tokio::test]
    async fn badge_forwards_exact_count() {
        let svc = service();
        for count in [7, 0, -2] {
            svc.set_badge(count).await.unwrap();
            assert_eq!(svc.notifier().badge().map(|b| b.value()), Some(count));
        }
    }
}
