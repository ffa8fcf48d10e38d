//! Application configuration value object

use serde::{Deserialize, Serialize};

/// Application name shown as the notification source when none is configured
pub const DEFAULT_APP_NAME: &str = "local-notify";

/// Windows-specific configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WindowsConfig {
    /// AppUserModelID the toast notifier binds to. Unpackaged applications
    /// need one registered for toasts to surface.
    pub app_user_model_id: Option<String>,
}

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub app_name: Option<String>,
    pub backend: Option<String>,
    pub windows: Option<WindowsConfig>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            app_name: Some(DEFAULT_APP_NAME.to_string()),
            backend: Some("auto".to_string()),
            windows: Some(WindowsConfig {
                app_user_model_id: None,
            }),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            app_name: other.app_name.or(self.app_name),
            backend: other.backend.or(self.backend),
            windows: Self::merge_windows_config(self.windows, other.windows),
        }
    }

    /// Merge Windows config sections
    fn merge_windows_config(
        base: Option<WindowsConfig>,
        other: Option<WindowsConfig>,
    ) -> Option<WindowsConfig> {
        match (base, other) {
            (None, None) => None,
            (Some(b), None) => Some(b),
            (None, Some(o)) => Some(o),
            (Some(b), Some(o)) => Some(WindowsConfig {
                app_user_model_id: o.app_user_model_id.or(b.app_user_model_id),
            }),
        }
    }

    /// Get the application name, or the default if not set
    pub fn app_name_or_default(&self) -> &str {
        self.app_name.as_deref().unwrap_or(DEFAULT_APP_NAME)
    }

    /// Get the backend preference string, or "auto" if not set
    pub fn backend_or_default(&self) -> &str {
        self.backend.as_deref().unwrap_or("auto")
    }

    /// Get the configured AppUserModelID, if any
    pub fn app_user_model_id(&self) -> Option<&str> {
        self.windows
            .as_ref()
            .and_then(|w| w.app_user_model_id.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_have_expected_values() {
        let config = AppConfig::defaults();
        assert_eq!(config.app_name, Some("local-notify".to_string()));
        assert_eq!(config.backend, Some("auto".to_string()));
        assert!(config.app_user_model_id().is_none());
    }

    #[test]
    fn empty_has_all_none() {
        let config = AppConfig::empty();
        assert!(config.app_name.is_none());
        assert!(config.backend.is_none());
        assert!(config.windows.is_none());
    }

    #[test]
    fn accessors_fall_back_to_defaults() {
        let config = AppConfig::empty();
        assert_eq!(config.app_name_or_default(), "local-notify");
        assert_eq!(config.backend_or_default(), "auto");
    }

    #[test]
    fn merge_other_takes_precedence() {
        let base = AppConfig {
            app_name: Some("base".to_string()),
            backend: Some("auto".to_string()),
            ..Default::default()
        };

        let other = AppConfig {
            app_name: Some("other".to_string()),
            backend: None, // Should not override
            ..Default::default()
        };

        let merged = base.merge(other);

        assert_eq!(merged.app_name, Some("other".to_string()));
        assert_eq!(merged.backend, Some("auto".to_string()));
    }

    #[test]
    fn merge_windows_config_other_wins() {
        let base = AppConfig {
            windows: Some(WindowsConfig {
                app_user_model_id: Some("Base.App".to_string()),
            }),
            ..Default::default()
        };
        let other = AppConfig {
            windows: Some(WindowsConfig {
                app_user_model_id: Some("Other.App".to_string()),
            }),
            ..Default::default()
        };
        let merged = base.merge(other);
        assert_eq!(merged.app_user_model_id(), Some("Other.App"));
    }

    #[test]
    fn merge_windows_config_preserves_base() {
        let base = AppConfig {
            windows: Some(WindowsConfig {
                app_user_model_id: Some("Base.App".to_string()),
            }),
            ..Default::default()
        };
        let merged = base.merge(AppConfig::empty());
        assert_eq!(merged.app_user_model_id(), Some("Base.App"));
    }
}
