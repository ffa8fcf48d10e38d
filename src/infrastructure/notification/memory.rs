//! In-memory notification adapter
//!
//! Records everything it is handed instead of surfacing it. Used as the
//! `none` backend for headless environments and as the observable double
//! in tests.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::SystemTime;

use async_trait::async_trait;

use crate::application::ports::{NotificationError, Notifier};
use crate::domain::notification::{
    BadgePayload, DeliveryTime, NotificationId, NotificationRequest, ToastPayload,
};

/// A recorded scheduled notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledEntry {
    /// Schedule tag (the stringified request id)
    pub tag: String,
    /// Effective delivery time
    pub delivery: SystemTime,
    /// Rendered toast XML
    pub xml: String,
}

#[derive(Debug, Default)]
struct MemoryState {
    shown: Vec<ToastPayload>,
    scheduled: Vec<ScheduledEntry>,
    badge: Option<BadgePayload>,
}

/// Notifier that records submissions in memory
#[derive(Clone, Default)]
pub struct MemoryNotifier {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryNotifier {
    /// Create a new empty memory notifier
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Toasts submitted for immediate display
    pub fn shown(&self) -> Vec<ToastPayload> {
        self.state().shown.clone()
    }

    /// Currently scheduled notifications
    pub fn scheduled(&self) -> Vec<ScheduledEntry> {
        self.state().scheduled.clone()
    }

    /// Last badge payload submitted, if any
    pub fn badge(&self) -> Option<BadgePayload> {
        self.state().badge
    }
}

#[async_trait]
impl Notifier for MemoryNotifier {
    async fn show(&self, request: &NotificationRequest) -> Result<(), NotificationError> {
        self.state().shown.push(request.to_toast());
        Ok(())
    }

    async fn schedule(
        &self,
        request: &NotificationRequest,
        delivery: DeliveryTime,
    ) -> Result<(), NotificationError> {
        self.state().scheduled.push(ScheduledEntry {
            tag: request.id().tag(),
            delivery: delivery.as_system_time(),
            xml: request.to_toast().as_xml().to_string(),
        });
        Ok(())
    }

    async fn set_badge(&self, count: i32) -> Result<(), NotificationError> {
        self.state().badge = Some(BadgePayload::new(count));
        Ok(())
    }

    async fn cancel(&self, id: NotificationId) -> Result<(), NotificationError> {
        let mut state = self.state();
        // First tag match only, as the OS schedule lookup behaves
        if let Some(index) = state
            .scheduled
            .iter()
            .position(|entry| id.matches_tag(&entry.tag))
        {
            state.scheduled.remove(index);
        }
        Ok(())
    }
}
