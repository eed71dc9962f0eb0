//! General multi-entry block.

use std::collections::BTreeMap;

use super::{BlockOptions, DataBlock};
use crate::error::{CriticalDataError, Result};
use crate::name::DataName;

/// Block holding any number of named values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CriticalDataBlock {
    options: BlockOptions,
    entries: BTreeMap<DataName, Vec<u8>>,
}

impl CriticalDataBlock {
    pub fn new(options: BlockOptions) -> Self {
        Self {
            options,
            entries: BTreeMap::new(),
        }
    }

    /// Builds a block from raw `(name, bytes)` pairs; later duplicates win.
    pub fn from_entries(
        options: BlockOptions,
        entries: impl IntoIterator<Item = (DataName, Vec<u8>)>,
    ) -> Self {
        Self {
            options,
            entries: entries.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = (&DataName, &[u8])> {
        self.entries
            .iter()
            .map(|(name, bytes)| (name, bytes.as_slice()))
    }

    pub fn into_entries(self) -> Vec<(DataName, Vec<u8>)> {
        self.entries.into_iter().collect()
    }

    /// Moves every entry of `other` into this block, replacing existing values.
    pub fn merge(&mut self, other: CriticalDataBlock) {
        self.entries.extend(other.entries);
    }
}

impl DataBlock for CriticalDataBlock {
    fn options(&self) -> BlockOptions {
        self.options
    }

    fn get_raw(&self, name: &DataName) -> Result<&[u8]> {
        self.entries
            .get(name)
            .map(Vec::as_slice)
            .ok_or_else(|| CriticalDataError::NotFound(name.clone()))
    }

    fn set_raw(&mut self, name: DataName, bytes: Vec<u8>) -> Result<()> {
        self.entries.insert(name, bytes);
        Ok(())
    }

    fn delete(&mut self, name: &DataName) -> Result<()> {
        self.entries
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| CriticalDataError::NotFound(name.clone()))
    }

    fn contains(&self, name: &DataName) -> bool {
        self.entries.contains_key(name)
    }

    fn names(&self) -> Vec<DataName> {
        self.entries.keys().cloned().collect()
    }

    fn has_data(&self) -> bool {
        !self.entries.is_empty()
    }
}
