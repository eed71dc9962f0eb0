//! Pass-through adapter between blocks and a remote category.

use std::fmt;
use std::sync::Arc;

use super::traits::{CriticalDataStore, RemoteCategory};
use super::{dedup_names, require_compression, require_names};
use crate::access::{AccessKind, AccessValidator};
use crate::block::{BlockOptions, CriticalDataBlock, DataBlock};
use crate::error::{CriticalDataError, Result};
use crate::name::DataName;

/// Uncached store bound to one remote category.
///
/// Every operation is checked in this order:
/// 1. arguments (non-empty names / block, block compression matches the
///    store's)
/// 2. a remote category is attached
/// 3. the access validator allows the operation
pub struct StoreAdapter {
    name: String,
    validator: Arc<dyn AccessValidator>,
    options: BlockOptions,
    category: Option<Arc<dyn RemoteCategory>>,
}

impl StoreAdapter {
    /// Create an adapter that must be [`initialize`](Self::initialize)d
    /// before use.
    pub fn new(
        name: impl Into<String>,
        validator: Arc<dyn AccessValidator>,
        options: BlockOptions,
    ) -> Self {
        Self {
            name: name.into(),
            validator,
            options,
            category: None,
        }
    }

    /// Attach the live remote category handle.
    pub fn initialize(&mut self, category: Arc<dyn RemoteCategory>) {
        tracing::debug!(
            "Store '{}' bound to remote category '{}'",
            self.name,
            category.category()
        );
        self.category = Some(category);
    }

    pub fn is_initialized(&self) -> bool {
        self.category.is_some()
    }

    pub fn options(&self) -> BlockOptions {
        self.options
    }

    /// Runs the access validator for this store.
    pub fn validate(&self, access: AccessKind) -> Result<()> {
        self.validator.validate(access, &self.name)
    }

    fn remote(&self) -> Result<&dyn RemoteCategory> {
        self.category
            .as_deref()
            .ok_or_else(|| CriticalDataError::NotReady {
                store: self.name.clone(),
            })
    }

    fn remote_for(&self, access: AccessKind) -> Result<&dyn RemoteCategory> {
        let remote = self.remote()?;
        self.validate(access)?;
        Ok(remote)
    }

    fn read_remote(&self, names: &[DataName]) -> Result<CriticalDataBlock> {
        require_names(names)?;
        let remote = self.remote_for(AccessKind::Read)?;
        let names = dedup_names(names);
        let items = remote.read(&names)?;
        tracing::trace!(
            "Remote read on '{}': {} requested, {} found",
            self.name,
            names.len(),
            items.len()
        );
        Ok(CriticalDataBlock::from_entries(self.options, items))
    }

    /// Sends raw entries straight to the remote category.
    pub(crate) fn write_entries(&self, items: Vec<(DataName, Vec<u8>)>) -> Result<()> {
        if items.is_empty() {
            return Err(CriticalDataError::InvalidArgument("block has no data"));
        }
        let remote = self.remote_for(AccessKind::Write)?;
        remote.write(&items)?;
        tracing::trace!("Remote write on '{}': {} entries", self.name, items.len());
        Ok(())
    }
}

impl fmt::Debug for StoreAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreAdapter")
            .field("name", &self.name)
            .field("options", &self.options)
            .field(
                "category",
                &self.category.as_ref().map(|category| category.category()),
            )
            .finish()
    }
}

impl CriticalDataStore for StoreAdapter {
    fn name(&self) -> &str {
        &self.name
    }

    fn read(&mut self, names: &[DataName]) -> Result<CriticalDataBlock> {
        self.read_remote(names)
    }

    fn fill(&mut self, names: &[DataName], block: &mut dyn DataBlock) -> Result<Vec<DataName>> {
        require_names(names)?;
        require_compression(self.options, block)?;
        let found = self.read_remote(names)?;
        let names = found.names();
        for name in &names {
            block.accepts(name)?;
        }
        for (name, bytes) in found.into_entries() {
            block.set_raw(name, bytes)?;
        }
        Ok(names)
    }

    fn remove(&mut self, names: &[DataName]) -> Result<()> {
        require_names(names)?;
        let remote = self.remote_for(AccessKind::Remove)?;
        remote.remove(names)?;
        tracing::trace!("Remote remove on '{}': {} names", self.name, names.len());
        Ok(())
    }

    fn write(&mut self, block: &dyn DataBlock) -> Result<()> {
        require_compression(self.options, block)?;
        let items = block
            .names()
            .into_iter()
            .map(|name| {
                let bytes = block.get_raw(&name)?.to_vec();
                Ok((name, bytes))
            })
            .collect::<Result<Vec<_>>>()?;
        self.write_entries(items)
    }
}
