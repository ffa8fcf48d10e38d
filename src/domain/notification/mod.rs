//! Notification value objects and payload formats

pub mod payload;
pub mod request;
pub mod schedule;

pub use payload::{BadgePayload, ToastPayload};
pub use request::{NotificationId, NotificationRequest};
pub use schedule::{Delay, DeliveryTime, SCHEDULE_CLAMP_MS};
