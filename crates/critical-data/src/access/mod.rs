//! Access validation by game mode and game-cycle phase.
//!
//! Validators are pure decision functions over state owned by the host
//! application. They query the current [`GameMode`] and [`GameCycleState`]
//! and either allow an [`AccessKind`] or fail with
//! [`CriticalDataError::AccessDenied`](crate::CriticalDataError::AccessDenied).

mod entity;
mod history;

pub use entity::EntityStoreValidator;
pub use history::HistoryStoreValidator;

use crate::error::{CriticalDataError, Result};

/// Kind of store operation being validated.
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
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum AccessKind {
    Read,
    Write,
    Remove,
}

/// Coarse operational phase of the hosting application.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum GameMode {
    /// Regular game play.
    #[default]
    Play,
    /// Replay of recorded games; persisted state is read-only.
    History,
    /// Operator/configuration menus.
    Utility,
}

/// Phase of the game cycle within [`GameMode::Play`].
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum GameCycleState {
    /// No game in progress.
    #[default]
    Idle,
    /// A game cycle is running.
    Active,
}

/// Read-only view of the current game mode.
pub trait GameModeQuery: Send + Sync {
    fn game_mode(&self) -> GameMode;
}

/// Read-only view of the current game-cycle phase.
pub trait GameCycleQuery: Send + Sync {
    fn game_cycle_state(&self) -> GameCycleState;
}

/// Gate consulted before every store operation.
pub trait AccessValidator: Send + Sync {
    fn validate(&self, access: AccessKind, store: &str) -> Result<()>;
}

pub(crate) fn deny(store: &str, access: AccessKind, rule: &'static str) -> CriticalDataError {
    tracing::debug!("Denied {} access to store '{}': {}", access, store, rule);
    CriticalDataError::AccessDenied {
        store: store.to_string(),
        access,
        rule,
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum_names_are_snake_case() {
        assert_eq!(AccessKind::Remove.to_string(), "remove");
        assert_eq!(GameMode::Utility.as_ref(), "utility");
        assert_eq!("HISTORY".parse::<GameMode>().unwrap(), GameMode::History);
        assert_eq!(
            "active".parse::<GameCycleState>().unwrap(),
            GameCycleState::Active
        );
    }
}
