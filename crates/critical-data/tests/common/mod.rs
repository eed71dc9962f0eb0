#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use critical_data::{
    BlockOptions, CachedStore, DataName, GameCycleQuery, GameCycleState, GameMode, GameModeQuery,
    RemoteCategory, RemoteError, Result, StoreKind,
};

/// One call received by [`RecordingCategory`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    Read(Vec<String>),
    Write(Vec<(String, Vec<u8>)>),
    Remove(Vec<String>),
}

#[derive(Default)]
struct Inner {
    items: HashMap<DataName, Vec<u8>>,
    calls: Vec<Call>,
    fail_next: bool,
}

/// Remote category double that logs every call and can fail on demand.
#[derive(Clone, Default)]
pub struct RecordingCategory {
    inner: Arc<Mutex<Inner>>,
}

impl RecordingCategory {
    pub fn seed(&self, name: &str, bytes: &[u8]) {
        self.inner
            .lock()
            .unwrap()
            .items
            .insert(dn(name), bytes.to_vec());
    }

    pub fn get(&self, name: &str) -> Option<Vec<u8>> {
        self.inner.lock().unwrap().items.get(&dn(name)).cloned()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.inner.lock().unwrap().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.inner.lock().unwrap().calls.clear();
    }

    /// The next remote call fails with `Unavailable` and changes nothing.
    pub fn fail_next(&self) {
        self.inner.lock().unwrap().fail_next = true;
    }

    fn check(inner: &mut Inner) -> Result<()> {
        if std::mem::take(&mut inner.fail_next) {
            return Err(RemoteError::Unavailable("injected failure".into()).into());
        }
        Ok(())
    }
}

fn strings(names: &[DataName]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

impl RemoteCategory for RecordingCategory {
    fn category(&self) -> &str {
        "recording"
    }

    fn read(&self, names: &[DataName]) -> Result<Vec<(DataName, Vec<u8>)>> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.push(Call::Read(strings(names)));
        Self::check(&mut inner)?;
        Ok(names
            .iter()
            .filter_map(|name| {
                inner
                    .items
                    .get(name)
                    .map(|bytes| (name.clone(), bytes.clone()))
            })
            .collect())
    }

    fn write(&self, items: &[(DataName, Vec<u8>)]) -> Result<()> {
        let mut inner = self.inner.lock().unwrap();
        let mut logged: Vec<_> = items
            .iter()
            .map(|(name, bytes)| (name.to_string(), bytes.clone()))
            .collect();
        logged.sort();
        inner.calls.push(Call::Write(logged));
        Self::check(&mut inner)?;
        inner.items.extend(items.iter().cloned());
        Ok(())
    }

    fn remove(&self, names: &[DataName]) -> Result<()> {
        let mut inner = self.inner.lock().unwrap();
        inner.calls.push(Call::Remove(strings(names)));
        Self::check(&mut inner)?;
        for name in names {
            inner.items.remove(name);
        }
        Ok(())
    }
}

/// Game mode and cycle state the tests can flip between calls.
pub struct Host {
    mode: Mutex<GameMode>,
    cycle: Mutex<GameCycleState>,
}

impl Host {
    pub fn new(mode: GameMode, cycle: GameCycleState) -> Arc<Self> {
        Arc::new(Self {
            mode: Mutex::new(mode),
            cycle: Mutex::new(cycle),
        })
    }

    pub fn set_mode(&self, mode: GameMode) {
        *self.mode.lock().unwrap() = mode;
    }

    pub fn set_cycle(&self, cycle: GameCycleState) {
        *self.cycle.lock().unwrap() = cycle;
    }
}

impl GameModeQuery for Host {
    fn game_mode(&self) -> GameMode {
        *self.mode.lock().unwrap()
    }
}

impl GameCycleQuery for Host {
    fn game_cycle_state(&self) -> GameCycleState {
        *self.cycle.lock().unwrap()
    }
}

pub fn dn(raw: &str) -> DataName {
    DataName::new(raw).unwrap()
}

pub fn dns(raw: &[&str]) -> Vec<DataName> {
    raw.iter().map(|name| dn(name)).collect()
}

/// Initialized store of `kind` over a fresh recording category.
pub fn store(
    kind: StoreKind,
    host: &Arc<Host>,
    options: BlockOptions,
) -> (CachedStore, RecordingCategory) {
    let mut store = kind.build_store(host.clone(), host.clone(), options);
    let remote = RecordingCategory::default();
    store.initialize(Arc::new(remote.clone()));
    (store, remote)
}
