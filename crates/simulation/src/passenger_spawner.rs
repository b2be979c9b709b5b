//! Periodic passenger spawning.
//!
//! The first wave comes after a third of the interval so a fresh network has
//! someone to carry early. Each wave adds one passenger to every station
//! with room, headed for a shape present elsewhere in the network.

use std::collections::BTreeSet;

use rand::seq::IteratorRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::network::NetworkComponents;
use crate::network_params::NetworkParams;
use crate::passenger::{Passenger, PassengerHolder};
use crate::station::ShapeType;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PassengerSpawner {
    pub interval_ms: f32,
    pub remaining_ms: f32,
}

impl Default for PassengerSpawner {
    fn default() -> Self {
        Self::from_params(&NetworkParams::default())
    }
}

impl PassengerSpawner {
    pub fn from_params(params: &NetworkParams) -> Self {
        Self {
            interval_ms: params.spawn_interval_ms,
            remaining_ms: params.first_spawn_delay_ms(),
        }
    }

    /// Run the countdown by `dt_ms`. Returns true when a wave is due, and
    /// restarts the countdown.
    pub fn tick(&mut self, dt_ms: f32) -> bool {
        self.remaining_ms -= dt_ms;
        if self.remaining_ms > 0.0 {
            return false;
        }
        self.remaining_ms += self.interval_ms;
        if self.remaining_ms <= 0.0 {
            self.remaining_ms = self.interval_ms;
        }
        true
    }

    /// Spawn one wave. Returns the number of passengers created.
    pub fn spawn_wave(network: &mut NetworkComponents, rng: &mut impl Rng) -> usize {
        let present: BTreeSet<ShapeType> = network.stations.iter().map(|s| s.shape).collect();
        let mut spawned = 0;
        for i in 0..network.stations.len() {
            let station = &network.stations[i];
            if !station.has_room() {
                continue;
            }
            let own = station.shape;
            let Some(destination) = present.iter().copied().filter(|s| *s != own).choose(rng)
            else {
                continue;
            };
            let mut passenger = Passenger::new(network.ids.next_passenger(), destination);
            passenger.last_station = Some(network.stations[i].id);
            network.stations[i].add_passenger(passenger);
            spawned += 1;
        }
        spawned
    }
}
