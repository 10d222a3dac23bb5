//! Application state.

use std::sync::Arc;

use sales_store::{Catalog, MemoryStore, Store, StoreError};

use crate::config::ServiceConfig;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// The generated dataset. Read-only after startup.
    pub store: Arc<dyn Store>,

    /// Service configuration.
    pub config: ServiceConfig,
}

impl AppState {
    /// Create application state around an existing store.
    #[must_use]
    pub fn new(store: Arc<dyn Store>, config: ServiceConfig) -> Self {
        Self { store, config }
    }

    /// Generate the dataset described by the configuration.
    ///
    /// Uses the catalog file at `catalog_path` when set, otherwise the built-in catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog file cannot be loaded or is invalid.
    pub fn from_config(config: ServiceConfig) -> Result<Self, StoreError> {
        let catalog = match &config.catalog_path {
            Some(path) => Catalog::from_json_file(path)?,
            None => {
                tracing::debug!("No catalog file configured, using built-in catalog");
                Catalog::default()
            }
        };

        let store = MemoryStore::generate(&catalog, config.seed)?;

        Ok(Self::new(Arc::new(store), config))
    }
}
