//! Contracts at the store boundary.

use crate::block::{CriticalDataBlock, DataBlock};
use crate::error::Result;
use crate::name::DataName;

/// One category of the remote, authoritative key-value store.
///
/// Calls are blocking request/response operations. Implementations own their
/// synchronization; every method takes `&self`.
pub trait RemoteCategory: Send + Sync {
    /// Category identifier on the remote platform.
    fn category(&self) -> &str;

    /// Returns the stored items among `names`. Absent names are omitted.
    fn read(&self, names: &[DataName]) -> Result<Vec<(DataName, Vec<u8>)>>;

    fn write(&self, items: &[(DataName, Vec<u8>)]) -> Result<()>;

    /// Removes `names`; absent names are ignored.
    fn remove(&self, names: &[DataName]) -> Result<()>;
}

/// Read/write access to critical data keyed by [`DataName`].
pub trait CriticalDataStore {
    /// Store name used in access checks and diagnostics.
    fn name(&self) -> &str;

    /// Returns the values among `names` that exist.
    fn read(&mut self, names: &[DataName]) -> Result<CriticalDataBlock>;

    /// Writes the values among `names` that exist into `block` and returns
    /// their names.
    fn fill(&mut self, names: &[DataName], block: &mut dyn DataBlock) -> Result<Vec<DataName>>;

    fn remove(&mut self, names: &[DataName]) -> Result<()>;

    fn write(&mut self, block: &dyn DataBlock) -> Result<()>;
}

/// A store that defers writes until the surrounding transaction closes.
pub trait CachedCriticalDataStore: CriticalDataStore {
    /// Forgets every cached entry, including unflushed writes.
    fn reset_cache(&mut self);

    /// Sends every pending write to the remote store.
    ///
    /// On error nothing is flushed, so a later call retries the same entries.
    fn commit_pending_writes(&mut self, weight: TransactionWeight) -> Result<CommitOutcome>;

    fn has_pending_writes(&self) -> bool;
}

/// Weight of the transaction boundary recognized by the remote platform.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum TransactionWeight {
    Lightweight,
    Heavyweight,
}

impl TransactionWeight {
    pub const fn from_heavyweight(is_heavyweight: bool) -> Self {
        if is_heavyweight {
            Self::Heavyweight
        } else {
            Self::Lightweight
        }
    }

    pub const fn is_heavyweight(&self) -> bool {
        matches!(self, Self::Heavyweight)
    }
}

/// Result of a commit attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommitOutcome {
    /// Nothing was pending.
    Clean,
    /// The given number of entries were written and flushed.
    Committed(usize),
    /// The store's commit policy refused this transaction weight; the given
    /// number of entries remain pending.
    Deferred(usize),
}

impl CommitOutcome {
    pub const fn written(&self) -> usize {
        match self {
            Self::Committed(count) => *count,
            Self::Clean | Self::Deferred(_) => 0,
        }
    }
}
