//! Application state shared across handlers.

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::config::StorefrontConfig;
use crate::store::{DocumentStore, StoreError};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// configuration, the static catalog, and the document store. Handlers
/// never hold ambient globals; all state flows through here.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: Catalog,
    store: DocumentStore,
}

impl AppState {
    /// Create a new application state, opening the document store under
    /// the configured data directory.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the data directory cannot be created.
    pub fn new(config: StorefrontConfig) -> Result<Self, StoreError> {
        let store = DocumentStore::open(&config.data_dir)?;
        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog: Catalog::ethereal_eve(),
                store,
            }),
        })
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the product catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Get a reference to the document store.
    #[must_use]
    pub fn store(&self) -> &DocumentStore {
        &self.inner.store
    }
}
