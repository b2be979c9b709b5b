//! The traversal ring a metro follows along its path.
//!
//! Each step is a `(segment_index, direction)` pair with a link to the step
//! after it. Open paths are walked forward to the last segment and back
//! again; looped paths are walked forward only. Steps live in an arena
//! indexed by `StepId` so a metro holds a plain index into the ring.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

pub type StepId = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    pub fn flipped(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TravelStep {
    pub segment_index: usize,
    pub direction: Direction,
    pub next: StepId,
}

#[derive(Debug, Clone, Default)]
pub struct TravelRing {
    steps: Vec<TravelStep>,
    by_key: HashMap<(usize, Direction), StepId>,
}

/// The step after `(index, direction)` on a path of `count` segments.
fn successor(index: usize, direction: Direction, count: usize, looped: bool) -> (usize, Direction) {
    let last = count - 1;
    match direction {
        Direction::Forward if index < last => (index + 1, Direction::Forward),
        Direction::Forward if looped => (0, Direction::Forward),
        Direction::Forward => (index, direction.flipped()),
        Direction::Backward if index > 0 => (index - 1, Direction::Backward),
        Direction::Backward if looped => (last, Direction::Backward),
        Direction::Backward => (index, direction.flipped()),
    }
}

impl TravelRing {
    /// Walk from `(0, Forward)` until a step repeats, then close the ring.
    pub fn build(segment_count: usize, looped: bool) -> Self {
        let mut ring = Self::default();
        if segment_count == 0 {
            return ring;
        }

        let mut key = (0, Direction::Forward);
        let mut order: Vec<(usize, Direction)> = Vec::new();
        while !ring.by_key.contains_key(&key) {
            ring.by_key.insert(key, order.len());
            order.push(key);
            key = successor(key.0, key.1, segment_count, looped);
        }
        debug_assert_eq!(key, order[0], "travel ring must close on its head");

        let len = order.len();
        ring.steps = order
            .into_iter()
            .enumerate()
            .map(|(id, (segment_index, direction))| TravelStep {
                segment_index,
                direction,
                next: (id + 1) % len,
            })
            .collect();
        ring
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn head(&self) -> Option<StepId> {
        if self.steps.is_empty() {
            None
        } else {
            Some(0)
        }
    }

    pub fn step(&self, id: StepId) -> Option<&TravelStep> {
        self.steps.get(id)
    }

    pub fn find(&self, segment_index: usize, direction: Direction) -> Option<StepId> {
        self.by_key.get(&(segment_index, direction)).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TravelStep> {
        self.steps.iter()
    }
}
