//! Plugin that registers the network observation system.
//!
//! Adds the `CurrentObservation` and `OverflowTracker` resources and the
//! `build_observation` system to `FixedUpdate` in `SimulationSet::PostSim`.

use bevy::prelude::*;

use crate::network::consume_step_budget;
use crate::observation_builder::{build_observation, CurrentObservation, OverflowTracker};
use crate::SimulationSet;

pub struct ObservationPlugin;

impl Plugin for ObservationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CurrentObservation>()
            .init_resource::<OverflowTracker>();
        app.add_systems(
            FixedUpdate,
            build_observation
                .after(consume_step_budget)
                .in_set(SimulationSet::PostSim),
        );
    }
}
