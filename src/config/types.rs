//! Configuration types for the HawkerHub service.
//!
//! These structures are deserialized from the YAML configuration file. Every
//! field has a default so a partial file (or none at all) is valid.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerSettings {
    /// The socket address the service listens on.
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
        }
    }
}

/// Locations of the data files the service reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSettings {
    /// Path to the rental and footfall CSV.
    #[serde(default = "default_rental_dataset")]
    pub rental_dataset: PathBuf,
    /// Path to the logo shown on the home page.
    #[serde(default = "default_logo")]
    pub logo: PathBuf,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            rental_dataset: default_rental_dataset(),
            logo: default_logo(),
        }
    }
}

/// The complete service configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerSettings,
    /// Data file locations.
    #[serde(default)]
    pub data: DataSettings,
}

fn default_bind_address() -> String {
    "127.0.0.1:8501".to_string()
}

fn default_rental_dataset() -> PathBuf {
    PathBuf::from("data/rental_data.csv")
}

fn default_logo() -> PathBuf {
    PathBuf::from("assets/logo.jpg")
}
