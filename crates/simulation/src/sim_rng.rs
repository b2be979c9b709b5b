//! Seeded randomness for the whole engine.
//!
//! Station layout, passenger destination shapes and the order in which the
//! planner tries candidate stations all draw from one `ChaCha8Rng`, so a
//! seed fixes a game completely.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

pub const DEFAULT_SEED: u64 = 42;

#[derive(Resource)]
pub struct SimRng(pub ChaCha8Rng);

impl Default for SimRng {
    fn default() -> Self {
        Self::from_seed_u64(DEFAULT_SEED)
    }
}

impl SimRng {
    pub fn from_seed_u64(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Start over from `seed`. Used when a new game begins.
    pub fn reseed(&mut self, seed: u64) {
        *self = Self::from_seed_u64(seed);
    }
}

/// Inserts the default-seeded generator unless the app already has one.
pub struct SimRngPlugin;

impl Plugin for SimRngPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SimRng>();
    }
}
