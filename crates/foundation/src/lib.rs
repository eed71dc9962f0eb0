//! Foundation-side collaborators of the critical data layer.
//!
//! Provides the remote categories stores persist to (file-backed and
//! in-memory), the host-owned game mode and cycle state, environment
//! configuration, and [`StoreBootstrap`] which assembles the complete
//! [`StoreCollection`](critical_data::StoreCollection).
pub mod bootstrap;
pub mod config;
pub mod file;
pub mod host;
pub mod memory;

pub use bootstrap::StoreBootstrap;
pub use config::{Backend, FoundationConfig, default_data_dir};
pub use file::{FileCategory, StoredRecord};
pub use host::HostState;
pub use memory::{CategoryStats, InMemoryCategory};
