//! CLI argument definitions using Clap

use clap::{Parser, Subcommand};

use crate::domain::notification::DeliveryTime;

/// Valid configuration keys
pub const VALID_CONFIG_KEYS: &[&str] = &["app_name", "backend", "windows.app_user_model_id"];

/// Check if a key is a valid configuration key
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}

/// local-notify - native local notifications from the command line
#[derive(Parser, Debug)]
#[command(name = "local-notify")]
#[command(version)]
#[command(about = "Native local notifications: toast display, scheduling, badge counters")]
#[command(long_about = None)]
pub struct Cli {
    /// Application name shown as the notification source
    #[arg(long, value_name = "NAME", global = true)]
    pub app_name: Option<String>,

    /// Notification backend (auto, notify-rust, none; winrt on Windows)
    #[arg(long, value_name = "BACKEND", global = true)]
    pub backend: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show a notification immediately
    Show {
        /// Notification title
        title: String,
        /// Notification body
        body: String,
        /// Caller-assigned id
        #[arg(long, value_name = "ID", default_value_t = 0, allow_hyphen_values = true)]
        id: i32,
        /// Opaque launch arguments returned to the application on activation
        #[arg(long, value_name = "ARGS")]
        launch: Option<String>,
    },
    /// Schedule a notification for later delivery
    Schedule {
        /// Notification title
        title: String,
        /// Notification body
        body: String,
        /// Id used to locate the scheduled notification for cancellation
        #[arg(long, value_name = "ID", allow_hyphen_values = true)]
        id: i32,
        /// Delay until delivery (e.g., 30s, 5m, 1h30m)
        #[arg(
            long = "in",
            value_name = "DELAY",
            required_unless_present = "at",
            conflicts_with = "at"
        )]
        delay: Option<String>,
        /// Absolute delivery time as Unix seconds
        #[arg(long, value_name = "UNIX_SECONDS")]
        at: Option<u64>,
        /// Opaque launch arguments returned to the application on activation
        #[arg(long, value_name = "ARGS")]
        launch: Option<String>,
    },
    /// Set the application badge counter
    Badge {
        /// Badge value, passed through exactly (including 0 and negatives)
        #[arg(allow_hyphen_values = true)]
        count: i32,
    },
    /// Cancel a scheduled notification by id
    Cancel {
        /// Id the notification was scheduled with
        #[arg(allow_hyphen_values = true)]
        id: i32,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create a config file with default values
    Init,
    /// Set a configuration value
    Set {
        /// Configuration key
        key: String,
        /// Value to set
        value: String,
    },
    /// Get a configuration value
    Get {
        /// Configuration key
        key: String,
    },
    /// List all configuration values
    List,
    /// Print the config file path
    Path,
}

/// Resolved options for an immediate show
#[derive(Debug, Clone)]
pub struct ShowOptions {
    pub title: String,
    pub body: String,
    pub id: i32,
    pub launch: Option<String>,
}

/// Resolved options for a scheduled show
#[derive(Debug, Clone)]
pub struct ScheduleOptions {
    pub title: String,
    pub body: String,
    pub id: i32,
    pub delivery: DeliveryTime,
    pub launch: Option<String>,
}
