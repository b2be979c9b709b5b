//! The transit network resource and the systems that tick it.
//!
//! Per tick, while unpaused:
//! - clock and spawn countdown advance (`PreSim`);
//! - travel plans refresh, docked metros exchange passengers, metros move
//!   and due passengers spawn, in that order (`Simulation`);
//! - a step-by-step budget is spent (`PostSim`).

pub mod components;
pub mod state;
pub mod systems;
pub mod types;

pub use components::NetworkComponents;
pub use state::TransitNetwork;
pub use systems::*;
pub use types::EngineStatus;

use bevy::prelude::*;

use crate::SimulationSet;

pub struct TransitNetworkPlugin;

impl Plugin for TransitNetworkPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TransitNetwork>()
            .add_systems(
                FixedUpdate,
                advance_network_clock
                    .run_if(network_is_running)
                    .in_set(SimulationSet::PreSim),
            )
            .add_systems(
                FixedUpdate,
                (
                    refresh_travel_plans,
                    transfer_passengers,
                    move_metros,
                    spawn_passengers,
                )
                    .chain()
                    .run_if(network_is_running)
                    .in_set(SimulationSet::Simulation),
            )
            .add_systems(
                FixedUpdate,
                consume_step_budget
                    .run_if(network_is_running)
                    .in_set(SimulationSet::PostSim),
            );
    }
}
