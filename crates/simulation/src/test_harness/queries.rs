//! Query and simulation-tick methods for `TestNetwork`.

use bevy::prelude::*;

use crate::game_actions::{ActionQueue, ActionResult, ActionResultLog, ActionSource, GameAction};
use crate::network::TransitNetwork;
use crate::network_observation::NetworkObservation;
use crate::observation_builder::CurrentObservation;
use crate::path::PathId;
use crate::station::StationId;
use crate::TickCounter;

use super::TestNetwork;

impl TestNetwork {
    // -----------------------------------------------------------------------
    // Simulation
    // -----------------------------------------------------------------------

    /// Run N fixed-update ticks by directly executing the `FixedUpdate`
    /// schedule. This bypasses Bevy's time system entirely, which avoids
    /// issues with `MinimalPlugins` not advancing virtual time between
    /// updates.
    pub fn tick(&mut self, n: u32) {
        for _ in 0..n {
            self.app.world_mut().run_schedule(FixedUpdate);
            std::thread::yield_now();
        }
    }

    /// Tick until `done` holds or `max_ticks` ran out. Returns whether
    /// `done` was reached.
    pub fn run_until(&mut self, max_ticks: u32, mut done: impl FnMut(&TransitNetwork) -> bool) -> bool {
        for _ in 0..max_ticks {
            if done(self.network()) {
                return true;
            }
            self.tick(1);
        }
        done(self.network())
    }

    /// Queue an action as an agent would; it runs on the next tick.
    pub fn act(&mut self, action: GameAction) {
        let tick = self.tick_counter();
        self.app
            .world_mut()
            .resource_mut::<ActionQueue>()
            .push(tick, ActionSource::Agent, action);
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn world_mut(&mut self) -> &mut World {
        self.app.world_mut()
    }

    pub fn network(&self) -> &TransitNetwork {
        self.app.world().resource::<TransitNetwork>()
    }

    pub fn network_mut(&mut self) -> Mut<'_, TransitNetwork> {
        self.app.world_mut().resource_mut::<TransitNetwork>()
    }

    pub fn score(&self) -> u32 {
        self.network().score()
    }

    pub fn game_time(&self) -> u64 {
        self.network().game_time()
    }

    pub fn tick_counter(&self) -> u64 {
        self.app.world().resource::<TickCounter>().0
    }

    /// The snapshot built at the end of the last tick.
    pub fn observation(&self) -> &NetworkObservation {
        &self.app.world().resource::<CurrentObservation>().observation
    }

    /// Station ids of the path at `index` in creation order.
    pub fn stations_of(&self, index: usize) -> Vec<StationId> {
        self.network().components.paths[index].station_ids().collect()
    }

    pub fn path_id(&self, index: usize) -> PathId {
        self.network().components.paths[index].id
    }

    pub fn waiting_at(&self, station: StationId) -> usize {
        self.network()
            .components
            .station(station)
            .map_or(0, |s| s.passengers.len())
    }

    pub fn passenger_count(&self) -> usize {
        self.network().components.passenger_count()
    }

    pub fn last_action_result(&self) -> Option<&ActionResult> {
        self.app.world().resource::<ActionResultLog>().last_result()
    }
}
