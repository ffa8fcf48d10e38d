//! Configuration port interface

use async_trait::async_trait;
use std::path::PathBuf;

use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;

/// Port for configuration storage
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Load the stored configuration. A missing file yields an empty config
    /// rather than an error.
    async fn load(&self) -> Result<AppConfig, ConfigError>;

    /// Persist the given configuration.
    async fn save(&self, config: &AppConfig) -> Result<(), ConfigError>;

    /// Path of the backing config file.
    fn path(&self) -> PathBuf;

    /// Whether the backing config file exists.
    fn exists(&self) -> bool;

    /// Create the config file with default values.
    /// Fails if the file already exists.
    async fn init(&self) -> Result<(), ConfigError>;
}
