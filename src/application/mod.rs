//! Application layer - Notification surface and port interfaces
//!
//! Contains the dispatch service and trait definitions for
//! external system interactions.

pub mod notify;
pub mod ports;

// Re-export the service
pub use notify::NotificationService;
