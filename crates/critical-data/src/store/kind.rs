//! The per-entity stores of a game process.

use std::sync::Arc;

use super::adapter::StoreAdapter;
use super::cached::{CachedStore, CommitPolicy};
use crate::access::{
    AccessValidator, EntityStoreValidator, GameCycleQuery, GameModeQuery, HistoryStoreValidator,
};
use crate::block::BlockOptions;

/// Logical stores, one per game entity. Each lives for the process lifetime
/// and is reset (not rebuilt) on context switches.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum StoreKind {
    /// Cabinet-wide state owned by the game shell.
    Shell,
    /// State of the active theme.
    Theme,
    /// Payout-variant selection; only persisted by heavyweight transactions.
    Payvar,
    /// Records of completed cycles, shared with co-players.
    CoplayerHistory,
}

impl StoreKind {
    /// Remote category name; also the store name used in access checks.
    pub fn category_name(&self) -> &'static str {
        self.into()
    }

    pub const fn commit_policy(&self) -> CommitPolicy {
        match self {
            Self::Payvar => CommitPolicy::HeavyweightOnly,
            Self::Shell | Self::Theme | Self::CoplayerHistory => CommitPolicy::AnyWeight,
        }
    }

    pub fn validator(
        &self,
        mode: Arc<dyn GameModeQuery>,
        cycle: Arc<dyn GameCycleQuery>,
    ) -> Arc<dyn AccessValidator> {
        match self {
            Self::CoplayerHistory => Arc::new(HistoryStoreValidator::new(mode, cycle)),
            Self::Shell | Self::Theme | Self::Payvar => Arc::new(EntityStoreValidator::new(mode)),
        }
    }

    /// Builds an uninitialized cached store with this kind's defaults.
    pub fn build_store(
        &self,
        mode: Arc<dyn GameModeQuery>,
        cycle: Arc<dyn GameCycleQuery>,
        options: BlockOptions,
    ) -> CachedStore {
        let adapter = StoreAdapter::new(
            self.category_name(),
            self.validator(mode, cycle),
            options,
        );
        CachedStore::new(adapter, self.commit_policy())
    }
}
