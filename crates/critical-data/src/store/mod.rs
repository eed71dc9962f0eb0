//! Store layer: remote adapter, cached decorator and per-entity store kinds.
//!
//! Call sites talk to a [`CachedStore`]. It answers reads from its
//! [`CacheEngine`](crate::CacheEngine) and only falls back to the wrapped
//! [`StoreAdapter`] for misses; writes stay in the cache until
//! [`CachedCriticalDataStore::commit_pending_writes`] is called at
//! transaction close.

mod adapter;
mod cached;
mod kind;
mod traits;

pub use adapter::StoreAdapter;
pub use cached::{CachedStore, CommitPolicy};
pub use kind::StoreKind;
pub use traits::{
    CachedCriticalDataStore, CommitOutcome, CriticalDataStore, RemoteCategory, TransactionWeight,
};

use crate::block::{BlockOptions, DataBlock};
use crate::error::{CriticalDataError, Result};
use crate::name::DataName;

pub(crate) fn require_names(names: &[DataName]) -> Result<()> {
    if names.is_empty() {
        return Err(CriticalDataError::InvalidArgument("name list is empty"));
    }
    Ok(())
}

/// Raw bytes are only meaningful under the compression they were produced
/// with, so a store exchanges bytes only with blocks sharing its stage.
pub(crate) fn require_compression(store: BlockOptions, block: &dyn DataBlock) -> Result<()> {
    if block.options().compression != store.compression {
        return Err(CriticalDataError::InvalidArgument(
            "block compression differs from store",
        ));
    }
    Ok(())
}

/// Drops repeated names while keeping first-seen order.
pub(crate) fn dedup_names(names: &[DataName]) -> Vec<DataName> {
    let mut seen = std::collections::HashSet::with_capacity(names.len());
    names
        .iter()
        .filter(|name| seen.insert(*name))
        .cloned()
        .collect()
}
