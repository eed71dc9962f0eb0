//! Access policy for per-entity stores (shell, theme, payvar).

use std::sync::Arc;

use super::{AccessKind, AccessValidator, GameMode, GameModeQuery, deny};
use crate::error::Result;

/// Allows every access in Play and Utility modes; denies everything while
/// History replays are shown.
#[derive(Clone)]
pub struct EntityStoreValidator {
    mode: Arc<dyn GameModeQuery>,
}

impl EntityStoreValidator {
    pub fn new(mode: Arc<dyn GameModeQuery>) -> Self {
        Self { mode }
    }
}

impl AccessValidator for EntityStoreValidator {
    fn validate(&self, access: AccessKind, store: &str) -> Result<()> {
        match self.mode.game_mode() {
            GameMode::Play | GameMode::Utility => Ok(()),
            GameMode::History => Err(deny(
                store,
                access,
                "entity stores are unavailable in history mode",
            )),
        }
    }
}
