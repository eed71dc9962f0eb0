//! Access policy for game-history stores.

use std::sync::Arc;

use super::{
    AccessKind, AccessValidator, GameCycleQuery, GameCycleState, GameMode, GameModeQuery, deny,
};
use crate::error::Result;

/// History stores record completed game cycles.
///
/// | mode    | cycle  | read | write/remove |
/// |---------|--------|------|--------------|
/// | Play    | Idle   | no   | no           |
/// | Play    | Active | yes  | yes          |
/// | History | any    | yes  | no           |
/// | Utility | any    | no   | no           |
#[derive(Clone)]
pub struct HistoryStoreValidator {
    mode: Arc<dyn GameModeQuery>,
    cycle: Arc<dyn GameCycleQuery>,
}

impl HistoryStoreValidator {
    pub fn new(mode: Arc<dyn GameModeQuery>, cycle: Arc<dyn GameCycleQuery>) -> Self {
        Self { mode, cycle }
    }
}

impl AccessValidator for HistoryStoreValidator {
    fn validate(&self, access: AccessKind, store: &str) -> Result<()> {
        match self.mode.game_mode() {
            GameMode::Play => match self.cycle.game_cycle_state() {
                GameCycleState::Idle => Err(deny(
                    store,
                    access,
                    "history is inaccessible while the game cycle is idle",
                )),
                GameCycleState::Active => Ok(()),
            },
            GameMode::History => match access {
                AccessKind::Read => Ok(()),
                AccessKind::Write | AccessKind::Remove => {
                    Err(deny(store, access, "history mode is read-only"))
                }
            },
            GameMode::Utility => Err(deny(
                store,
                access,
                "history stores are unavailable in utility mode",
            )),
        }
    }
}
