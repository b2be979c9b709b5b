//! Plugin that wires up the game-actions subsystem: queue, executor, and log.

use bevy::prelude::*;

use super::executor::execute_queued_actions;
use super::result_log::ActionResultLog;
use super::ActionQueue;
use crate::network::advance_network_clock;
use crate::SimulationSet;

/// Registers the action queue, result log, and executor system. Actions
/// land before the network clock moves, so a pause takes effect the same
/// tick.
pub struct GameActionsPlugin;

impl Plugin for GameActionsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ActionQueue>();
        app.init_resource::<ActionResultLog>();

        app.add_systems(
            FixedUpdate,
            execute_queued_actions
                .before(advance_network_clock)
                .in_set(SimulationSet::PreSim),
        );
    }
}
