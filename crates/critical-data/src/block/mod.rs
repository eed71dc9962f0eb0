//! Named-value containers exchanged with stores.
//!
//! A block maps [`DataName`]s to the raw bytes that travel unchanged between
//! the cache and the remote store. Typed access runs the value codec and then
//! the block's compression stage, so the raw bytes of a compressed block are
//! already compressed.

mod multi;
mod single;

use std::fmt::Write as _;

pub use multi::CriticalDataBlock;
pub use single::SingleDataBlock;

use crate::codec::{Compression, CriticalValue};
use crate::error::Result;
use crate::name::DataName;

/// Per-instance block configuration, fixed at construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BlockOptions {
    pub compression: Compression,
    /// Produce a diagnostics string from [`DataBlock::describe`].
    pub describe: bool,
}

impl BlockOptions {
    pub const fn new(compression: Compression) -> Self {
        Self {
            compression,
            describe: false,
        }
    }

    #[must_use]
    pub const fn with_describe(mut self, describe: bool) -> Self {
        self.describe = describe;
        self
    }
}

/// Container of named critical data values.
pub trait DataBlock {
    fn options(&self) -> BlockOptions;

    /// Stored bytes for `name`, exactly as shipped to the remote store.
    fn get_raw(&self, name: &DataName) -> Result<&[u8]>;

    fn set_raw(&mut self, name: DataName, bytes: Vec<u8>) -> Result<()>;

    /// Fails with the error `set_raw` would raise for `name`, without
    /// storing anything.
    fn accepts(&self, _name: &DataName) -> Result<()> {
        Ok(())
    }

    fn delete(&mut self, name: &DataName) -> Result<()>;

    fn contains(&self, name: &DataName) -> bool;

    /// Names currently holding a value, in ascending order.
    fn names(&self) -> Vec<DataName>;

    fn has_data(&self) -> bool;

    /// Human-readable summary, or `None` when diagnostics are disabled.
    fn describe(&self) -> Option<String> {
        if !self.options().describe {
            return None;
        }
        let mut out = String::new();
        for name in self.names() {
            let Ok(bytes) = self.get_raw(&name) else {
                continue;
            };
            if !out.is_empty() {
                out.push_str(", ");
            }
            let preview = &bytes[..bytes.len().min(8)];
            let _ = write!(out, "{name}=<{} bytes {}>", bytes.len(), hex::encode(preview));
        }
        Some(out)
    }

    fn get<T: CriticalValue>(&self, name: &DataName) -> Result<T>
    where
        Self: Sized,
    {
        let stored = self.get_raw(name)?;
        let plain = self.options().compression.decompress(stored)?;
        Ok(T::decode(&plain)?)
    }

    fn set<T: CriticalValue>(&mut self, name: DataName, value: &T) -> Result<()>
    where
        Self: Sized,
    {
        let stored = self.options().compression.compress(value.encode()?)?;
        self.set_raw(name, stored)
    }
}
