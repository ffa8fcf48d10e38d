//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with the OS notification services and config storage.

pub mod config;
pub mod notification;

// Re-export adapters
pub use config::XdgConfigStore;
pub use notification::{
    create_notifier, BackendPreference, MemoryNotifier, NotifierBackend, NotifyRustNotifier,
};
#[cfg(windows)]
pub use notification::WinrtNotifier;
