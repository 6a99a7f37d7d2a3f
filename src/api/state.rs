//! Application state for the HawkerHub API.
//!
//! This module defines the shared state available to all request handlers.

use std::sync::{Arc, Mutex, PoisonError};

use crate::config::ConfigLoader;
use crate::error::HubResult;
use crate::insights::{DatasetCache, RentalDataset};

/// Shared application state.
///
/// Holds the configuration and the memoised rental dataset. The dataset is
/// read-only once loaded; the lock only guards the memo itself.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
    datasets: Arc<Mutex<DatasetCache>>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
            datasets: Arc::new(Mutex::new(DatasetCache::new())),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the configured rental dataset, loading it on first use.
    pub fn rental_dataset(&self) -> HubResult<Arc<RentalDataset>> {
        let mut cache = self.datasets.lock().unwrap_or_else(PoisonError::into_inner);
        cache.get_or_load(&self.config.config().data.rental_dataset)
    }
}
