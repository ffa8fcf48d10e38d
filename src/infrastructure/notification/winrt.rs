//! WinRT notification adapter
//!
//! Direct pass-through to the Windows toast, schedule, and badge surfaces.
//! Toasts are loaded from the rendered XML payload; scheduled toasts are
//! tagged with the stringified request id; badges go through the OS blank
//! numeric template. WinRT calls block, so each operation runs under
//! spawn_blocking with owned captures.

use std::time::{SystemTime, UNIX_EPOCH};

use async_trait::async_trait;
use windows::core::{Interface, HSTRING};
use windows::Data::Xml::Dom::{XmlDocument, XmlElement};
use windows::Foundation::DateTime;
use windows::UI::Notifications::{
    BadgeNotification, BadgeTemplateType, BadgeUpdateManager, ScheduledToastNotification,
    ToastNotification, ToastNotificationManager, ToastNotifier,
};

use crate::application::ports::{NotificationError, Notifier};
use crate::domain::notification::{DeliveryTime, NotificationId, NotificationRequest};

/// Seconds between the Windows epoch (1601-01-01) and the Unix epoch
const WINDOWS_EPOCH_OFFSET_SECS: i64 = 11_644_473_600;

/// WinRT-backed notifier
pub struct WinrtNotifier {
    /// AppUserModelID the toast notifier binds to. Unpackaged applications
    /// need one registered for toasts to surface; packaged applications
    /// inherit their identity and leave this unset.
    app_user_model_id: Option<String>,
}

impl WinrtNotifier {
    /// Create a notifier using the current application identity
    pub fn new() -> Self {
        Self {
            app_user_model_id: None,
        }
    }

    /// Create a notifier bound to an explicit AppUserModelID
    pub fn with_app_user_model_id(aumid: impl Into<String>) -> Self {
        Self {
            app_user_model_id: Some(aumid.into()),
        }
    }

    fn toast_notifier(aumid: Option<&str>) -> windows::core::Result<ToastNotifier> {
        match aumid {
            Some(id) => ToastNotificationManager::CreateToastNotifierWithId(&HSTRING::from(id)),
            None => ToastNotificationManager::CreateToastNotifier(),
        }
    }

    fn load_xml(xml: &str) -> windows::core::Result<XmlDocument> {
        let doc = XmlDocument::new()?;
        doc.LoadXml(&HSTRING::from(xml))?;
        Ok(doc)
    }
}

impl Default for WinrtNotifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert a SystemTime into WinRT ticks (100 ns intervals since 1601-01-01)
fn to_datetime(time: SystemTime) -> DateTime {
    let since_unix = time.duration_since(UNIX_EPOCH).unwrap_or_default();
    DateTime {
        UniversalTime: WINDOWS_EPOCH_OFFSET_SECS * 10_000_000 + (since_unix.as_nanos() / 100) as i64,
    }
}

fn service_error(e: windows::core::Error) -> NotificationError {
    NotificationError::Service(e.to_string())
}

fn join_error(e: tokio::task::JoinError) -> NotificationError {
    NotificationError::Service(format!("Task join error: {}", e))
}

#[async_trait]
impl Notifier for WinrtNotifier {
    async fn show(&self, request: &NotificationRequest) -> Result<(), NotificationError> {
        let xml = request.to_toast().as_xml().to_owned();
        let aumid = self.app_user_model_id.clone();

        tokio::task::spawn_blocking(move || {
            let doc = Self::load_xml(&xml).map_err(service_error)?;
            let toast = ToastNotification::CreateToastNotification(&doc).map_err(service_error)?;
            let notifier = Self::toast_notifier(aumid.as_deref()).map_err(service_error)?;
            notifier.Show(&toast).map_err(service_error)
        })
        .await
        .map_err(join_error)?
    }

    async fn schedule(
        &self,
        request: &NotificationRequest,
        delivery: DeliveryTime,
    ) -> Result<(), NotificationError> {
        let xml = request.to_toast().as_xml().to_owned();
        let tag = request.id().tag();
        let delivery_time = to_datetime(delivery.as_system_time());
        let aumid = self.app_user_model_id.clone();

        tokio::task::spawn_blocking(move || {
            let doc = Self::load_xml(&xml).map_err(service_error)?;
            let scheduled =
                ScheduledToastNotification::CreateScheduledToastNotification(&doc, delivery_time)
                    .map_err(service_error)?;
            scheduled
                .SetId(&HSTRING::from(tag.as_str()))
                .map_err(service_error)?;
            let notifier = Self::toast_notifier(aumid.as_deref()).map_err(service_error)?;
            notifier.AddToSchedule(&scheduled).map_err(service_error)
        })
        .await
        .map_err(join_error)?
    }

    async fn set_badge(&self, count: i32) -> Result<(), NotificationError> {
        let value = count.to_string();
        let aumid = self.app_user_model_id.clone();

        tokio::task::spawn_blocking(move || {
            // Blank numeric template from the OS, value filled in
            let doc = BadgeUpdateManager::GetTemplateContent(BadgeTemplateType::BadgeNumber)
                .map_err(service_error)?;
            let element: XmlElement = doc
                .SelectSingleNode(&HSTRING::from("/badge"))
                .and_then(|node| node.cast())
                .map_err(service_error)?;
            element
                .SetAttribute(&HSTRING::from("value"), &HSTRING::from(value.as_str()))
                .map_err(service_error)?;

            let badge = BadgeNotification::CreateBadgeNotification(&doc).map_err(service_error)?;
            let updater = match aumid.as_deref() {
                Some(id) => {
                    BadgeUpdateManager::CreateBadgeUpdaterForApplicationWithId(&HSTRING::from(id))
                        .map_err(service_error)?
                }
                None => BadgeUpdateManager::CreateBadgeUpdaterForApplication()
                    .map_err(service_error)?,
            };
            updater.Update(&badge).map_err(service_error)
        })
        .await
        .map_err(join_error)?
    }

    async fn cancel(&self, id: NotificationId) -> Result<(), NotificationError> {
        let aumid = self.app_user_model_id.clone();

        tokio::task::spawn_blocking(move || {
            let notifier = Self::toast_notifier(aumid.as_deref()).map_err(service_error)?;
            let scheduled = notifier
                .GetScheduledToastNotifications()
                .map_err(service_error)?;
            for notification in scheduled {
                let tag = notification.Id().map_err(service_error)?;
                if id.matches_tag(&tag.to_string()) {
                    return notifier
                        .RemoveFromSchedule(&notification)
                        .map_err(service_error);
                }
            }
            // No entry tagged with this id; silently ignored
            Ok(())
        })
        .await
        .map_err(join_error)?
    }
}
