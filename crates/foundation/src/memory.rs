//! In-memory remote category for tests and local runs.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use critical_data::{DataName, RemoteCategory, RemoteError, Result};

/// Number of calls an [`InMemoryCategory`] has served.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CategoryStats {
    pub reads: usize,
    pub writes: usize,
    pub removes: usize,
}

#[derive(Default)]
struct State {
    items: HashMap<DataName, Vec<u8>>,
    stats: CategoryStats,
}

/// Remote category backed by a shared map.
///
/// Clones share the same storage, so a test can keep one handle for
/// inspection while a store owns another.
#[derive(Clone)]
pub struct InMemoryCategory {
    category: String,
    state: Arc<RwLock<State>>,
}

impl InMemoryCategory {
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            state: Arc::new(RwLock::new(State::default())),
        }
    }

    /// Call counters since creation.
    pub fn stats(&self) -> Result<CategoryStats> {
        let state = self.state.read().map_err(|_| RemoteError::LockPoisoned)?;
        Ok(state.stats)
    }

    /// Copy of every stored item, sorted by name.
    pub fn snapshot(&self) -> Result<Vec<(DataName, Vec<u8>)>> {
        let state = self.state.read().map_err(|_| RemoteError::LockPoisoned)?;
        let mut items: Vec<_> = state
            .items
            .iter()
            .map(|(name, bytes)| (name.clone(), bytes.clone()))
            .collect();
        items.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(items)
    }
}

impl RemoteCategory for InMemoryCategory {
    fn category(&self) -> &str {
        &self.category
    }

    fn read(&self, names: &[DataName]) -> Result<Vec<(DataName, Vec<u8>)>> {
        let mut state = self.state.write().map_err(|_| RemoteError::LockPoisoned)?;
        state.stats.reads += 1;
        Ok(names
            .iter()
            .filter_map(|name| {
                state
                    .items
                    .get(name)
                    .map(|bytes| (name.clone(), bytes.clone()))
            })
            .collect())
    }

    fn write(&self, items: &[(DataName, Vec<u8>)]) -> Result<()> {
        let mut state = self.state.write().map_err(|_| RemoteError::LockPoisoned)?;
        state.stats.writes += 1;
        state.items.extend(items.iter().cloned());
        Ok(())
    }

    fn remove(&self, names: &[DataName]) -> Result<()> {
        let mut state = self.state.write().map_err(|_| RemoteError::LockPoisoned)?;
        state.stats.removes += 1;
        for name in names {
            state.items.remove(name);
        }
        Ok(())
    }
}
