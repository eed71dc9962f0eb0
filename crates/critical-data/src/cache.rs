//! In-memory write-back cache for one remote store.
//!
//! Each entry carries a pending flag. The set of pending entries is exactly
//! what still has to be sent to the remote store, maintained incrementally:
//! - a read-fill from the remote store never marks an entry pending
//! - a caller write to an existing entry always marks it pending
//! - a caller write creating an entry marks it pending only when forced
//!
//! The table is cleared only by an explicit [`CacheEngine::clear`].

use std::collections::HashMap;

use crate::block::{BlockOptions, CriticalDataBlock, DataBlock};
use crate::error::Result;
use crate::name::DataName;

/// Cached bytes plus their unflushed state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CachedEntry {
    pub bytes: Vec<u8>,
    pub pending: bool,
}

/// Write-back cache keyed by data name.
#[derive(Debug, Default)]
pub struct CacheEngine {
    options: BlockOptions,
    entries: HashMap<DataName, CachedEntry>,
}

impl CacheEngine {
    /// Blocks produced by this cache carry `options`.
    pub fn new(options: BlockOptions) -> Self {
        Self {
            options,
            entries: HashMap::new(),
        }
    }

    /// Returns the cached subset of `names`. Misses are simply absent.
    pub fn read(&self, names: &[DataName]) -> CriticalDataBlock {
        let cached = names.iter().filter_map(|name| {
            self.entries
                .get(name)
                .map(|entry| (name.clone(), entry.bytes.clone()))
        });
        CriticalDataBlock::from_entries(self.options, cached)
    }

    /// Copies every cached name of `names` into `block` and returns the names
    /// that were found. Other names in `block` are left untouched.
    ///
    /// Every found name is checked against `block` first, so a rejected name
    /// leaves `block` unchanged.
    pub fn fill(&self, names: &[DataName], block: &mut dyn DataBlock) -> Result<Vec<DataName>> {
        let found: Vec<(&DataName, &CachedEntry)> = names
            .iter()
            .filter_map(|name| self.entries.get(name).map(|entry| (name, entry)))
            .collect();
        for (name, _) in &found {
            block.accepts(name)?;
        }

        let mut filled = Vec::with_capacity(found.len());
        for (name, entry) in found {
            block.set_raw(name.clone(), entry.bytes.clone())?;
            filled.push(name.clone());
        }
        Ok(filled)
    }

    /// Records every entry of `block`.
    ///
    /// Existing entries are overwritten and marked pending. New entries are
    /// marked pending only when `force_write` is set; `false` means the bytes
    /// came from the remote store and are already persisted.
    pub fn write(&mut self, block: &dyn DataBlock, force_write: bool) -> Result<()> {
        let incoming = block
            .names()
            .into_iter()
            .map(|name| {
                let bytes = block.get_raw(&name)?.to_vec();
                Ok((name, bytes))
            })
            .collect::<Result<Vec<_>>>()?;

        for (name, bytes) in incoming {
            match self.entries.get_mut(&name) {
                Some(entry) => {
                    entry.bytes = bytes;
                    entry.pending = true;
                }
                None => {
                    self.entries.insert(
                        name,
                        CachedEntry {
                            bytes,
                            pending: force_write,
                        },
                    );
                }
            }
        }
        Ok(())
    }

    /// Evicts `names`, pending or not.
    pub fn remove(&mut self, names: &[DataName]) {
        for name in names {
            self.entries.remove(name);
        }
    }

    /// Snapshot of every pending entry.
    pub fn pending_writes(&self) -> CriticalDataBlock {
        let pending = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.pending)
            .map(|(name, entry)| (name.clone(), entry.bytes.clone()));
        CriticalDataBlock::from_entries(self.options, pending)
    }

    /// Clears every pending flag. Call only once the snapshot from
    /// [`CacheEngine::pending_writes`] is durably committed.
    pub fn flush_pending_writes(&mut self) {
        for entry in self.entries.values_mut() {
            entry.pending = false;
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn options(&self) -> BlockOptions {
        self.options
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, name: &DataName) -> bool {
        self.entries.contains_key(name)
    }

    pub fn entry(&self, name: &DataName) -> Option<&CachedEntry> {
        self.entries.get(name)
    }

    pub fn is_pending(&self, name: &DataName) -> bool {
        self.entries.get(name).is_some_and(|entry| entry.pending)
    }

    pub fn pending_count(&self) -> usize {
        self.entries.values().filter(|entry| entry.pending).count()
    }
}
