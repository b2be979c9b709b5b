use std::collections::VecDeque;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::GameAction;

/// Who asked for an action. Only used for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionSource {
    Player,
    Agent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueuedAction {
    /// Tick counter value when the action was submitted.
    pub tick: u64,
    pub source: ActionSource,
    pub action: GameAction,
}

/// Actions waiting for the executor. They run in submission order at the
/// start of the next `PreSim`, before the network clock advances.
#[derive(Resource, Debug, Default)]
pub struct ActionQueue {
    waiting: VecDeque<QueuedAction>,
}

impl ActionQueue {
    pub fn push(&mut self, tick: u64, source: ActionSource, action: GameAction) {
        self.waiting.push_back(QueuedAction {
            tick,
            source,
            action,
        });
    }

    /// Hand over everything queued so far, leaving the queue empty.
    pub fn drain(&mut self) -> VecDeque<QueuedAction> {
        std::mem::take(&mut self.waiting)
    }

    pub fn len(&self) -> usize {
        self.waiting.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waiting.is_empty()
    }
}
