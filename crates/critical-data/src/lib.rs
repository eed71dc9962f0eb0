//! Write-back cache and commit engine for critical game data.
//!
//! Critical data is named state that has to survive power loss. The
//! authoritative copy lives in a remote key-value store (the foundation);
//! this crate sits between call sites and that store and guarantees:
//! - at most one remote round trip per missing name
//! - writes are deferred until the surrounding transaction closes
//! - operations illegal in the current game mode / cycle phase are refused
//!
//! Modules are organized leaves first:
//! - [`name`] and [`codec`] define identifiers and value encodings
//! - [`block`] holds named raw values with typed accessors
//! - [`cache`] is the per-store write-back table
//! - [`access`] gates operations by game mode and cycle phase
//! - [`store`] hosts the remote adapter and the cached decorator
//! - [`collection`] fans reset/commit out to every registered store
pub mod access;
pub mod block;
pub mod cache;
pub mod codec;
pub mod collection;
pub mod error;
pub mod integrity;
pub mod name;
pub mod store;

pub use access::{
    AccessKind, AccessValidator, EntityStoreValidator, GameCycleQuery, GameCycleState, GameMode,
    GameModeQuery, HistoryStoreValidator,
};
pub use block::{BlockOptions, CriticalDataBlock, DataBlock, SingleDataBlock};
pub use cache::{CacheEngine, CachedEntry};
pub use codec::{CodecError, Compression, CriticalValue, Encoding, Structural};
pub use collection::StoreCollection;
pub use error::{CriticalDataError, ErrorKind, RemoteError, Result};
pub use integrity::Checksum;
pub use name::DataName;
pub use store::{
    CachedCriticalDataStore, CachedStore, CommitOutcome, CommitPolicy, CriticalDataStore,
    RemoteCategory, StoreAdapter, StoreKind, TransactionWeight,
};
