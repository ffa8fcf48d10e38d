//! Notifier backend factory

use std::fmt;
use std::str::FromStr;

use crate::application::ports::Notifier;
use crate::domain::config::AppConfig;

use super::memory::MemoryNotifier;
use super::notify_rust::NotifyRustNotifier;
#[cfg(windows)]
use super::winrt::WinrtNotifier;

/// Concrete notification backends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifierBackend {
    /// Windows toast/schedule/badge surface
    #[cfg(windows)]
    Winrt,
    /// Cross-platform notify-rust surface (immediate display only)
    NotifyRust,
    /// In-memory sink for headless environments
    None,
}

impl fmt::Display for NotifierBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            #[cfg(windows)]
            NotifierBackend::Winrt => write!(f, "winrt"),
            NotifierBackend::NotifyRust => write!(f, "notify-rust"),
            NotifierBackend::None => write!(f, "none"),
        }
    }
}

/// User preference for backend selection.
///
/// - All platforms support `Auto` (the default), `NotifyRust`, and `None`.
/// - Windows additionally supports `Winrt`, which `Auto` resolves to there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackendPreference {
    /// Pick the native surface for the current platform
    #[default]
    Auto,
    /// Use the WinRT surface (Windows only)
    #[cfg(windows)]
    Winrt,
    /// Use notify-rust
    NotifyRust,
    /// Discard notifications (headless/testing)
    None,
}

impl fmt::Display for BackendPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendPreference::Auto => write!(f, "auto"),
            #[cfg(windows)]
            BackendPreference::Winrt => write!(f, "winrt"),
            BackendPreference::NotifyRust => write!(f, "notify-rust"),
            BackendPreference::None => write!(f, "none"),
        }
    }
}

/// Error type for parsing a backend preference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseBackendError {
    pub value: String,
    pub valid_options: &'static str,
}

impl fmt::Display for ParseBackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid backend '{}'. Valid options: {}",
            self.value, self.valid_options
        )
    }
}

impl std::error::Error for ParseBackendError {}

impl FromStr for BackendPreference {
    type Err = ParseBackendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(BackendPreference::Auto),
            #[cfg(windows)]
            "winrt" => Ok(BackendPreference::Winrt),
            "notify-rust" => Ok(BackendPreference::NotifyRust),
            "none" => Ok(BackendPreference::None),
            _ => Err(ParseBackendError {
                value: s.to_string(),
                #[cfg(windows)]
                valid_options: "auto, winrt, notify-rust, none",
                #[cfg(not(windows))]
                valid_options: "auto, notify-rust, none",
            }),
        }
    }
}

/// Create a notifier for the given preference.
///
/// Returns the adapter and the backend it resolved to. `Auto` resolves to
/// the WinRT surface on Windows and to notify-rust elsewhere.
pub fn create_notifier(
    preference: BackendPreference,
    config: &AppConfig,
) -> (Box<dyn Notifier>, NotifierBackend) {
    match preference {
        BackendPreference::Auto => {
            #[cfg(windows)]
            {
                create_winrt(config)
            }
            #[cfg(not(windows))]
            {
                create_notify_rust(config)
            }
        }
        #[cfg(windows)]
        BackendPreference::Winrt => create_winrt(config),
        BackendPreference::NotifyRust => create_notify_rust(config),
        BackendPreference::None => (
            Box::new(MemoryNotifier::new()) as Box<dyn Notifier>,
            NotifierBackend::None,
        ),
    }
}

#[cfg(windows)]
fn create_winrt(config: &AppConfig) -> (Box<dyn Notifier>, NotifierBackend) {
    let notifier = match config.app_user_model_id() {
        Some(aumid) => WinrtNotifier::with_app_user_model_id(aumid),
        None => WinrtNotifier::new(),
    };
    (Box::new(notifier) as Box<dyn Notifier>, NotifierBackend::Winrt)
}

fn create_notify_rust(config: &AppConfig) -> (Box<dyn Notifier>, NotifierBackend) {
    (
        Box::new(NotifyRustNotifier::with_app_name(config.app_name_or_default()))
            as Box<dyn Notifier>,
        NotifierBackend::NotifyRust,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_preference_display() {
        assert_eq!(BackendPreference::Auto.to_string(), "auto");
        assert_eq!(BackendPreference::NotifyRust.to_string(), "notify-rust");
        assert_eq!(BackendPreference::None.to_string(), "none");
        #[cfg(windows)]
        assert_eq!(BackendPreference::Winrt.to_string(), "winrt");
    }

    #[test]
    fn backend_preference_from_str() {
        assert_eq!(
            "auto".parse::<BackendPreference>().unwrap(),
            BackendPreference::Auto
        );
        assert_eq!(
            "AUTO".parse::<BackendPreference>().unwrap(),
            BackendPreference::Auto
        );
        assert_eq!(
            "notify-rust".parse::<BackendPreference>().unwrap(),
            BackendPreference::NotifyRust
        );
        assert_eq!(
            "none".parse::<BackendPreference>().unwrap(),
            BackendPreference::None
        );
        #[cfg(windows)]
        assert_eq!(
            "winrt".parse::<BackendPreference>().unwrap(),
            BackendPreference::Winrt
        );
    }

    #[test]
    fn backend_preference_from_str_invalid() {
        let err = "growl".parse::<BackendPreference>().unwrap_err();
        assert_eq!(err.value, "growl");
    }

    #[test]
    fn backend_preference_default_is_auto() {
        assert_eq!(BackendPreference::default(), BackendPreference::Auto);
    }

    #[test]
    fn none_preference_creates_memory_backend() {
        let (_notifier, backend) =
            create_notifier(BackendPreference::None, &AppConfig::defaults());
        assert_eq!(backend, NotifierBackend::None);
    }

    #[test]
    #[cfg(not(windows))]
    fn auto_resolves_to_notify_rust_off_windows() {
        let (_notifier, backend) =
            create_notifier(BackendPreference::Auto, &AppConfig::defaults());
        assert_eq!(backend, NotifierBackend::NotifyRust);
    }

    #[test]
    #[cfg(windows)]
    fn auto_resolves_to_winrt_on_windows() {
        let (_notifier, backend) =
            create_notifier(BackendPreference::Auto, &AppConfig::defaults());
        assert_eq!(backend, NotifierBackend::Winrt);
    }
}
