//! Notification request value objects

use std::fmt;

use super::payload::ToastPayload;

/// Caller-assigned notification identifier.
///
/// Scheduled notifications are tagged with the stringified id so they can be
/// located for cancellation. Uniqueness is the caller's responsibility and is
/// not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NotificationId(i32);

impl NotificationId {
    /// Create an id from its raw integer value
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Get the raw integer value
    pub const fn value(&self) -> i32 {
        self.0
    }

    /// Render the schedule tag for this id
    pub fn tag(&self) -> String {
        self.0.to_string()
    }

    /// Check whether a schedule tag refers to this id.
    /// Comparison is case-insensitive, matching how tags are looked up
    /// in the OS schedule.
    pub fn matches_tag(&self, tag: &str) -> bool {
        tag.eq_ignore_ascii_case(&self.tag())
    }
}

impl From<i32> for NotificationId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Transient notification request.
///
/// Constructed by the caller at call time, consumed synchronously by the OS
/// notification manager, and discarded. Carries no state of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationRequest {
    title: String,
    body: String,
    id: NotificationId,
    launch_args: Option<String>,
}

impl NotificationRequest {
    /// Create a request with the two required display lines
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            id: NotificationId::default(),
            launch_args: None,
        }
    }

    /// Set the caller-assigned id
    pub fn with_id(mut self, id: impl Into<NotificationId>) -> Self {
        self.id = id.into();
        self
    }

    /// Attach an opaque launch argument string, returned to the application
    /// when the user activates the notification. Empty strings are treated
    /// as absent.
    pub fn with_launch_args(mut self, launch_args: impl Into<String>) -> Self {
        let launch_args = launch_args.into();
        self.launch_args = if launch_args.is_empty() {
            None
        } else {
            Some(launch_args)
        };
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn id(&self) -> NotificationId {
        self.id
    }

    pub fn launch_args(&self) -> Option<&str> {
        self.launch_args.as_deref()
    }

    /// Build the toast wire payload for this request
    pub fn to_toast(&self) -> ToastPayload {
        ToastPayload::new(&self.title, &self.body, self.launch_args())
    }
}
