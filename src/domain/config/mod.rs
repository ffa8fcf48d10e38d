//! Configuration value objects

pub mod app_config;

pub use app_config::{AppConfig, WindowsConfig, DEFAULT_APP_NAME};
