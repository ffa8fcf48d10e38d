//! Notification infrastructure module
//!
//! Provides the OS notification backends: the WinRT surface on Windows,
//! notify-rust elsewhere, and an in-memory sink for headless use.

mod factory;
mod memory;
mod notify_rust;
#[cfg(windows)]
mod winrt;

pub use factory::{create_notifier, BackendPreference, NotifierBackend, ParseBackendError};
pub use memory::{MemoryNotifier, ScheduledEntry};
pub use notify_rust::NotifyRustNotifier;
#[cfg(windows)]
pub use winrt::WinrtNotifier;
