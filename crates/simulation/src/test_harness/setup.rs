//! Builder methods for station, path and passenger setup in integration tests.

use bevy::prelude::*;

use crate::game_actions::{execute_action, ActionResult, GameAction};
use crate::network::TransitNetwork;
use crate::network_params::NetworkParams;
use crate::passenger::Passenger;
use crate::sim_rng::SimRng;
use crate::station::{ShapeType, Station, StationId};

use super::TestNetwork;

impl TestNetwork {
    // -----------------------------------------------------------------------
    // Stations, paths and passengers
    // -----------------------------------------------------------------------

    /// Replace the generated stations with a hand-placed layout. Station ids
    /// follow the slice order. Any existing paths are dropped.
    pub fn with_stations(mut self, layout: &[(ShapeType, Vec2)]) -> Self {
        let world = self.app.world_mut();
        let params = world.resource::<NetworkParams>().clone();
        let stations = layout
            .iter()
            .enumerate()
            .map(|(i, &(shape, position))| {
                Station::new(i as StationId, shape, position, params.stations.capacity)
            })
            .collect();
        world.insert_resource(TransitNetwork::new(&params, stations));
        self
    }

    /// Draw an open path through `stations`, in order.
    pub fn with_path(mut self, stations: &[StationId]) -> Self {
        let result = self.execute(GameAction::CreatePath {
            stations: stations.to_vec(),
            close_loop: false,
        });
        assert!(result.is_success(), "with_path({stations:?}) failed: {result:?}");
        self
    }

    /// Draw a looped path through `stations`, closing back on the first.
    pub fn with_loop(mut self, stations: &[StationId]) -> Self {
        let result = self.execute(GameAction::CreatePath {
            stations: stations.to_vec(),
            close_loop: true,
        });
        assert!(result.is_success(), "with_loop({stations:?}) failed: {result:?}");
        self
    }

    /// Put a passenger headed for `destination` on the platform of `station`.
    pub fn with_passenger(mut self, station: StationId, destination: ShapeType) -> Self {
        let mut network = self.app.world_mut().resource_mut::<TransitNetwork>();
        let id = network.components.ids.next_passenger();
        let mut passenger = Passenger::new(id, destination);
        passenger.last_station = Some(station);
        network
            .components
            .station_mut(station)
            .unwrap_or_else(|| panic!("with_passenger: no station {station}"))
            .add_passenger(passenger);
        self
    }

    /// Push the next passenger wave out of reach.
    pub fn with_spawning_disabled(mut self) -> Self {
        self.network_mut().spawner.remaining_ms = f32::INFINITY;
        self
    }

    pub fn paused(mut self) -> Self {
        let result = self.execute(GameAction::SetPaused { paused: true });
        assert!(result.is_success(), "pausing failed: {result:?}");
        self
    }

    // -----------------------------------------------------------------------
    // Direct execution
    // -----------------------------------------------------------------------

    /// Apply an action immediately, bypassing the queue.
    pub fn execute(&mut self, action: GameAction) -> ActionResult {
        let world = self.app.world_mut();
        world.resource_scope(|world, mut network: Mut<TransitNetwork>| {
            world.resource_scope(|world, mut rng: Mut<SimRng>| {
                let params = world.resource::<NetworkParams>();
                execute_action(&action, &mut network, &mut rng, params)
            })
        })
    }
}
