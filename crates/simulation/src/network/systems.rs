//! Thin ECS wrappers around the [`TransitNetwork`] tick pipeline.

use bevy::prelude::*;

use super::state::TransitNetwork;
use crate::network_params::NetworkParams;
use crate::sim_rng::SimRng;

pub fn network_is_running(network: Res<TransitNetwork>) -> bool {
    network.is_running()
}

pub fn advance_network_clock(params: Res<NetworkParams>, mut network: ResMut<TransitNetwork>) {
    let dt = network.scaled_dt(params.tick_ms);
    network.advance_clock(dt);
}

pub fn refresh_travel_plans(mut network: ResMut<TransitNetwork>, mut rng: ResMut<SimRng>) {
    network.refresh_travel_plans(&mut rng.0);
}

pub fn transfer_passengers(mut network: ResMut<TransitNetwork>) {
    network.transfer_passengers();
}

pub fn move_metros(params: Res<NetworkParams>, mut network: ResMut<TransitNetwork>) {
    let dt = network.scaled_dt(params.tick_ms);
    network.move_metros(dt);
}

pub fn spawn_passengers(mut network: ResMut<TransitNetwork>, mut rng: ResMut<SimRng>) {
    network.spawn_due_passengers(&mut rng.0);
}

pub fn consume_step_budget(mut network: ResMut<TransitNetwork>) {
    network.consume_step_budget();
}
