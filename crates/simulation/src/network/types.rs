use serde::{Deserialize, Serialize};

use crate::metro::MetroId;
use crate::passenger::PassengerId;
use crate::path::PathId;

/// Clock, score and run controls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineStatus {
    /// Unpaused ticks elapsed.
    pub game_time: u64,
    pub score: u32,
    pub is_paused: bool,
    pub game_speed: u32,
    /// When set, the engine pauses itself after this many more ticks.
    pub steps_allowed: Option<u32>,
}

impl Default for EngineStatus {
    fn default() -> Self {
        Self {
            game_time: 0,
            score: 0,
            is_paused: false,
            game_speed: 1,
            steps_allowed: None,
        }
    }
}

/// Monotonic id counters. Ids are never reused within a game.
#[derive(Debug, Clone)]
pub(crate) struct IdAllocator {
    path: PathId,
    metro: MetroId,
    passenger: PassengerId,
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self {
            path: 1,
            metro: 1,
            passenger: 1,
        }
    }
}

impl IdAllocator {
    pub(crate) fn peek_path(&self) -> PathId {
        self.path
    }

    pub(crate) fn next_path(&mut self) -> PathId {
        let id = self.path;
        self.path += 1;
        id
    }

    pub(crate) fn next_metro(&mut self) -> MetroId {
        let id = self.metro;
        self.metro += 1;
        id
    }

    pub(crate) fn next_passenger(&mut self) -> PassengerId {
        let id = self.passenger;
        self.passenger += 1;
        id
    }
}
