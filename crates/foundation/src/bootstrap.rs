//! Wiring of the per-entity stores onto foundation storage.

use std::sync::Arc;

use critical_data::{RemoteCategory, Result, StoreCollection, StoreKind};
use strum::IntoEnumIterator;

use crate::config::{Backend, FoundationConfig};
use crate::file::FileCategory;
use crate::host::HostState;
use crate::memory::InMemoryCategory;

/// Builds the store collection the transaction manager drives.
pub struct StoreBootstrap {
    config: FoundationConfig,
    host: Arc<HostState>,
}

impl StoreBootstrap {
    pub fn new(config: FoundationConfig, host: Arc<HostState>) -> Self {
        Self { config, host }
    }

    pub fn config(&self) -> &FoundationConfig {
        &self.config
    }

    /// Opens the remote category backing `kind`.
    pub fn category(&self, kind: StoreKind) -> Result<Arc<dyn RemoteCategory>> {
        let name = kind.category_name();
        let category: Arc<dyn RemoteCategory> = match self.config.backend {
            Backend::File => Arc::new(FileCategory::open(&self.config.data_dir, name)?),
            Backend::Memory => Arc::new(InMemoryCategory::new(name)),
        };
        Ok(category)
    }

    /// One initialized cached store per [`StoreKind`], in declaration order.
    pub fn build(&self) -> Result<StoreCollection> {
        let options = self.config.block_options();
        let mut stores = StoreCollection::default();

        for kind in StoreKind::iter() {
            let mut store = kind.build_store(self.host.clone(), self.host.clone(), options);
            store.initialize(self.category(kind)?);
            stores.register(Box::new(store));
        }

        tracing::info!(
            "Critical data stores ready: {} ({} backend)",
            stores.names().join(", "),
            self.config.backend
        );
        Ok(stores)
    }
}
