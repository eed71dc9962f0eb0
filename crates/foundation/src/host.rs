//! Game mode and cycle state owned by the host application.

use std::sync::RwLock;

use critical_data::{GameCycleQuery, GameCycleState, GameMode, GameModeQuery};

/// Shared game mode and cycle state.
///
/// The host application updates it on mode switches and cycle transitions;
/// access validators read it on every store operation.
#[derive(Debug, Default)]
pub struct HostState {
    mode: RwLock<GameMode>,
    cycle: RwLock<GameCycleState>,
}

impl HostState {
    pub fn new(mode: GameMode, cycle: GameCycleState) -> Self {
        Self {
            mode: RwLock::new(mode),
            cycle: RwLock::new(cycle),
        }
    }

    pub fn set_mode(&self, mode: GameMode) {
        let mut current = self.mode.write().unwrap_or_else(|e| e.into_inner());
        if *current != mode {
            tracing::info!("Game mode {} -> {}", *current, mode);
            *current = mode;
        }
    }

    pub fn set_cycle_state(&self, cycle: GameCycleState) {
        let mut current = self.cycle.write().unwrap_or_else(|e| e.into_inner());
        if *current != cycle {
            tracing::debug!("Game cycle {} -> {}", *current, cycle);
            *current = cycle;
        }
    }
}

// A poisoned lock still holds a valid Copy value, so queries never fail.
impl GameModeQuery for HostState {
    fn game_mode(&self) -> GameMode {
        *self.mode.read().unwrap_or_else(|e| e.into_inner())
    }
}

impl GameCycleQuery for HostState {
    fn game_cycle_state(&self) -> GameCycleState {
        *self.cycle.read().unwrap_or_else(|e| e.into_inner())
    }
}
