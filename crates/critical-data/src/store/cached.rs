//! Write-back decorator combining a [`CacheEngine`] with a [`StoreAdapter`].

use std::sync::Arc;

use super::adapter::StoreAdapter;
use super::traits::{
    CachedCriticalDataStore, CommitOutcome, CriticalDataStore, RemoteCategory, TransactionWeight,
};
use super::{dedup_names, require_compression, require_names};
use crate::access::AccessKind;
use crate::block::{BlockOptions, CriticalDataBlock, DataBlock};
use crate::cache::CacheEngine;
use crate::error::{CriticalDataError, Result};
use crate::name::DataName;

/// Which transaction weights may persist a store's pending writes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CommitPolicy {
    #[default]
    AnyWeight,
    /// Lightweight commits are deferred; entries stay pending until the next
    /// heavyweight commit.
    HeavyweightOnly,
}

impl CommitPolicy {
    pub const fn allows(&self, weight: TransactionWeight) -> bool {
        match self {
            Self::AnyWeight => true,
            Self::HeavyweightOnly => weight.is_heavyweight(),
        }
    }
}

/// Critical data store with read-fill-on-miss and deferred writes.
///
/// State is `Clean` while no entry is pending and `Dirty` otherwise:
/// - `write` moves to `Dirty`
/// - a successful `commit_pending_writes` moves back to `Clean`
/// - `reset_cache` moves to `Clean` from either state
///
/// A failed remote call leaves the cache exactly as it was.
#[derive(Debug)]
pub struct CachedStore {
    adapter: StoreAdapter,
    cache: CacheEngine,
    commit_policy: CommitPolicy,
}

impl CachedStore {
    pub fn new(adapter: StoreAdapter, commit_policy: CommitPolicy) -> Self {
        let cache = CacheEngine::new(adapter.options());
        Self {
            adapter,
            cache,
            commit_policy,
        }
    }

    /// Attach the live remote category handle to the wrapped adapter.
    pub fn initialize(&mut self, category: Arc<dyn RemoteCategory>) {
        self.adapter.initialize(category);
    }

    pub fn is_initialized(&self) -> bool {
        self.adapter.is_initialized()
    }

    /// Options every block exchanged with this store must share.
    pub fn options(&self) -> BlockOptions {
        self.adapter.options()
    }

    pub fn commit_policy(&self) -> CommitPolicy {
        self.commit_policy
    }

    pub fn cache(&self) -> &CacheEngine {
        &self.cache
    }

    /// Names of `names` that are not cached, without duplicates.
    fn misses(&self, names: &[DataName]) -> Vec<DataName> {
        dedup_names(names)
            .into_iter()
            .filter(|name| !self.cache.contains(name))
            .collect()
    }

    /// Reads `misses` from the remote store and records them as persisted.
    fn fetch(&mut self, misses: &[DataName]) -> Result<CriticalDataBlock> {
        let fetched = self.adapter.read(misses)?;
        tracing::debug!(
            "Store '{}' cache miss: fetched {}/{} from remote",
            self.adapter.name(),
            fetched.len(),
            misses.len()
        );
        self.cache.write(&fetched, false)?;
        Ok(fetched)
    }
}

impl CriticalDataStore for CachedStore {
    fn name(&self) -> &str {
        self.adapter.name()
    }

    fn read(&mut self, names: &[DataName]) -> Result<CriticalDataBlock> {
        require_names(names)?;
        let mut block = self.cache.read(names);
        let misses = self.misses(names);
        if !misses.is_empty() {
            let fetched = self.fetch(&misses)?;
            block.merge(fetched);
        }
        Ok(block)
    }

    fn fill(&mut self, names: &[DataName], block: &mut dyn DataBlock) -> Result<Vec<DataName>> {
        require_names(names)?;
        require_compression(self.adapter.options(), block)?;
        let names = dedup_names(names);
        let misses = self.misses(&names);
        if !misses.is_empty() {
            self.fetch(&misses)?;
        }
        self.cache.fill(&names, block)
    }

    fn remove(&mut self, names: &[DataName]) -> Result<()> {
        require_names(names)?;
        self.adapter.remove(names)?;
        self.cache.remove(names);
        tracing::debug!(
            "Store '{}' removed {} names",
            self.adapter.name(),
            names.len()
        );
        Ok(())
    }

    fn write(&mut self, block: &dyn DataBlock) -> Result<()> {
        if !block.has_data() {
            return Err(CriticalDataError::InvalidArgument("block has no data"));
        }
        require_compression(self.adapter.options(), block)?;
        if !self.adapter.is_initialized() {
            return Err(CriticalDataError::NotReady {
                store: self.adapter.name().to_string(),
            });
        }
        self.adapter.validate(AccessKind::Write)?;
        self.cache.write(block, true)
    }
}

impl CachedCriticalDataStore for CachedStore {
    fn reset_cache(&mut self) {
        tracing::debug!(
            "Store '{}' cache reset ({} entries, {} pending dropped)",
            self.adapter.name(),
            self.cache.len(),
            self.cache.pending_count()
        );
        self.cache.clear();
    }

    fn commit_pending_writes(&mut self, weight: TransactionWeight) -> Result<CommitOutcome> {
        let pending = self.cache.pending_writes();
        if pending.is_empty() {
            self.cache.flush_pending_writes();
            return Ok(CommitOutcome::Clean);
        }

        let count = pending.len();
        if !self.commit_policy.allows(weight) {
            tracing::debug!(
                "Store '{}' deferred {} pending writes: {} commit not allowed",
                self.adapter.name(),
                count,
                weight
            );
            return Ok(CommitOutcome::Deferred(count));
        }

        self.adapter.write_entries(pending.into_entries())?;
        self.cache.flush_pending_writes();
        tracing::debug!(
            "Store '{}' committed {} pending writes ({})",
            self.adapter.name(),
            count,
            weight
        );
        Ok(CommitOutcome::Committed(count))
    }

    fn has_pending_writes(&self) -> bool {
        self.cache.pending_count() > 0
    }
}
