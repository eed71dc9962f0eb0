//! Fan-out of reset and commit calls to every registered cached store.
//!
//! The surrounding transaction manager calls [`StoreCollection`] at
//! transaction close (commit) and on context changes (reset). Members are
//! registered explicitly and visited in registration order.

use crate::error::Result;
use crate::store::{CachedCriticalDataStore, CommitOutcome, TransactionWeight};

/// Ordered set of cached stores.
#[derive(Default)]
pub struct StoreCollection {
    stores: Vec<Box<dyn CachedCriticalDataStore>>,
}

impl StoreCollection {
    pub fn new(stores: Vec<Box<dyn CachedCriticalDataStore>>) -> Self {
        Self { stores }
    }

    /// Adds `store` (builder pattern).
    #[must_use]
    pub fn with_store(mut self, store: impl CachedCriticalDataStore + 'static) -> Self {
        self.register(Box::new(store));
        self
    }

    pub fn register(&mut self, store: Box<dyn CachedCriticalDataStore>) {
        tracing::debug!("Registered store '{}'", store.name());
        self.stores.push(store);
    }

    pub fn len(&self) -> usize {
        self.stores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stores.is_empty()
    }

    /// Store names in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.stores.iter().map(|store| store.name()).collect()
    }

    /// First store registered under `name`.
    pub fn store_mut(&mut self, name: &str) -> Option<&mut (dyn CachedCriticalDataStore + 'static)> {
        self.stores
            .iter_mut()
            .find(|store| store.name() == name)
            .map(|store| store.as_mut())
    }

    pub fn has_pending_writes(&self) -> bool {
        self.stores.iter().any(|store| store.has_pending_writes())
    }

    /// Clears the cache of every store.
    pub fn reset_all(&mut self) {
        for store in &mut self.stores {
            store.reset_cache();
        }
        tracing::debug!("Reset {} store caches", self.stores.len());
    }

    /// Commits pending writes of every store in registration order.
    ///
    /// Every store is attempted even if an earlier one fails, so one failing
    /// category does not hold back the others. Failed stores keep their
    /// pending writes; the first error is returned.
    pub fn commit_all_pending_writes(
        &mut self,
        weight: TransactionWeight,
    ) -> Result<Vec<(String, CommitOutcome)>> {
        let mut outcomes = Vec::with_capacity(self.stores.len());
        let mut first_error = None;

        for store in &mut self.stores {
            match store.commit_pending_writes(weight) {
                Ok(outcome) => outcomes.push((store.name().to_string(), outcome)),
                Err(err) => {
                    tracing::warn!("Commit of store '{}' failed: {}", store.name(), err);
                    if first_error.is_none() {
                        first_error = Some(err);
                    }
                }
            }
        }

        match first_error {
            Some(err) => Err(err),
            None => {
                let written: usize = outcomes.iter().map(|(_, outcome)| outcome.written()).sum();
                tracing::debug!(
                    "Committed {} entries across {} stores ({})",
                    written,
                    outcomes.len(),
                    weight
                );
                Ok(outcomes)
            }
        }
    }
}
