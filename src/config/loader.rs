//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for reading the service
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{HubError, HubResult};

use super::types::AppConfig;

/// Loads and provides access to the service configuration.
///
/// # Example
///
/// ```no_run
/// use hawker_hub::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/hawker_hub.yaml")?;
/// println!("Listening on {}", loader.config().server.bind_address);
/// # Ok::<(), hawker_hub::error::HubError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: AppConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// Returns `ConfigNotFound` when the file cannot be read and
    /// `ConfigParseError` when it is not valid YAML for [`AppConfig`].
    pub fn load<P: AsRef<Path>>(path: P) -> HubResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| HubError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config = serde_yaml::from_str(&content).map_err(|e| HubError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })?;

        Ok(Self { config })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}
