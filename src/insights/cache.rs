//! Memoised dataset loading.
//!
//! The rental CSV does not change while the service runs, so it is parsed once
//! and reused. Entries are keyed on the canonical path and the file's
//! modification time; touching the file forces a reload.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;

use tracing::{debug, info};

use crate::error::{HubError, HubResult};

use super::dataset::RentalDataset;
use super::loader::load_dataset;

#[derive(Debug)]
struct CachedDataset {
    modified: Option<SystemTime>,
    dataset: Arc<RentalDataset>,
}

/// A memo of loaded datasets keyed on source identity.
#[derive(Debug, Default)]
pub struct DatasetCache {
    entries: HashMap<PathBuf, CachedDataset>,
}

impl DatasetCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the dataset at `path`, loading it if it is not cached or the
    /// file changed since it was cached.
    ///
    /// Failed loads are not cached.
    pub fn get_or_load<P: AsRef<Path>>(&mut self, path: P) -> HubResult<Arc<RentalDataset>> {
        let path = path.as_ref();
        let key = fs::canonicalize(path).map_err(|_| HubError::DatasetNotFound {
            path: path.display().to_string(),
        })?;
        let modified = fs::metadata(&key).and_then(|m| m.modified()).ok();

        if let Some(entry) = self.entries.get(&key) {
            if entry.modified == modified {
                debug!(path = %key.display(), "Dataset cache hit");
                return Ok(Arc::clone(&entry.dataset));
            }
            info!(path = %key.display(), "Dataset changed on disk, reloading");
        }

        let dataset = Arc::new(load_dataset(&key)?);
        self.entries.insert(
            key,
            CachedDataset {
                modified,
                dataset: Arc::clone(&dataset),
            },
        );
        Ok(dataset)
    }

    /// Drops every cached dataset.
    pub fn invalidate(&mut self) {
        self.entries.clear();
    }

    /// Number of cached datasets.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
