//! Bounded history of executed actions.

use std::collections::VecDeque;

use bevy::prelude::*;

use super::{ActionResult, GameAction};

/// Entries kept before the oldest is dropped.
pub const LOG_CAPACITY: usize = 64;

/// What each recent action returned. Read by the observation builder and by
/// the agent loop to report results.
#[derive(Resource, Debug, Clone, Default)]
pub struct ActionResultLog {
    entries: VecDeque<(GameAction, ActionResult)>,
}

impl ActionResultLog {
    pub fn push(&mut self, action: GameAction, result: ActionResult) {
        if self.entries.len() == LOG_CAPACITY {
            self.entries.pop_front();
        }
        self.entries.push_back((action, result));
    }

    /// Up to `count` of the newest entries, oldest first.
    pub fn recent(&self, count: usize) -> impl Iterator<Item = &(GameAction, ActionResult)> {
        self.entries
            .iter()
            .skip(self.entries.len().saturating_sub(count))
    }

    pub fn last_result(&self) -> Option<&ActionResult> {
        self.entries.back().map(|(_, result)| result)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
