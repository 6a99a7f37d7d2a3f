//! Configuration loading for the HawkerHub service.
//!
//! This module loads the service settings (bind address, dataset location and
//! static asset paths) from a YAML file. The grant, rent and column tables are
//! compiled into the crate and are not configurable.
//!
//! # Example
//!
//! ```no_run
//! use hawker_hub::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/hawker_hub.yaml").unwrap();
//! println!("Dataset: {}", loader.config().data.rental_dataset.display());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, DataSettings, ServerSettings};
