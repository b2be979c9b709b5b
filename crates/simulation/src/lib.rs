use bevy::prelude::*;

pub mod agent_protocol;
pub mod config;
pub mod game_actions;
pub mod location;
pub mod metro;
pub mod network;
pub mod network_observation;
pub mod network_params;
pub mod observation_builder;
pub mod observation_plugin;
pub mod passenger;
pub mod passenger_mover;
pub mod passenger_spawner;
pub mod path;
pub mod path_colors;
pub mod path_editing;
pub mod path_manager;
pub mod routing;
pub mod segments;
pub mod sim_rng;
pub mod simulation_sets;
pub mod station;
pub mod travel_plan_finder;
pub mod travel_steps;

pub use simulation_sets::SimulationSet;

#[cfg(test)]
mod integration_tests;
#[cfg(any(test, feature = "bench"))]
pub mod test_harness;

// ---------------------------------------------------------------------------
// Core resources
// ---------------------------------------------------------------------------

/// Global tick counter incremented each FixedUpdate, paused or not.
#[derive(Resource, Default)]
pub struct TickCounter(pub u64);

pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            FixedUpdate,
            (
                SimulationSet::PreSim,
                SimulationSet::Simulation,
                SimulationSet::PostSim,
            )
                .chain(),
        );

        // Core resources and systems that don't belong to any feature
        app.init_resource::<network_params::NetworkParams>()
            .init_resource::<TickCounter>()
            .add_systems(FixedUpdate, tick_counter.in_set(SimulationSet::PreSim));

        // RNG first: the network is generated from it when initialized.
        app.add_plugins((
            sim_rng::SimRngPlugin,
            network::TransitNetworkPlugin,
            game_actions::GameActionsPlugin,
            observation_plugin::ObservationPlugin,
        ));
    }
}

pub fn tick_counter(mut tick: ResMut<TickCounter>) {
    tick.0 = tick.0.wrapping_add(1);
}
