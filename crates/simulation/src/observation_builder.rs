//! Builds a `NetworkObservation` snapshot from ECS resources each tick.
//!
//! The `build_observation` system runs in `FixedUpdate` / `SimulationSet::PostSim`
//! so that all network writes have settled before we capture the snapshot.

use std::collections::BTreeMap;

use bevy::prelude::*;

use crate::game_actions::ActionResultLog;
use crate::network::TransitNetwork;
use crate::network_observation::{
    ActionResultEntry, MetroSnapshot, NetworkObservation, PathSnapshot, StationSnapshot,
};
use crate::network_params::{FailureParams, NetworkParams};
use crate::passenger::PassengerHolder;
use crate::station::{Station, StationId};
use crate::TickCounter;

// ---------------------------------------------------------------------------
// Resources
// ---------------------------------------------------------------------------

/// The most recent network observation, updated every tick in PostSim.
#[derive(Resource, Default, Debug, Clone)]
pub struct CurrentObservation {
    pub observation: NetworkObservation,
}

/// How long each station has been continuously full.
#[derive(Resource, Default, Debug, Clone)]
pub struct OverflowTracker {
    timers: BTreeMap<StationId, f32>,
    seen_game_time: u64,
}

impl OverflowTracker {
    /// Add `dt_ms` to every full station and forget the others.
    pub fn update(&mut self, stations: &[Station], dt_ms: f32) {
        let timers = stations
            .iter()
            .filter(|s| !s.has_room())
            .map(|s| (s.id, self.overflow_ms(s.id) + dt_ms))
            .collect();
        self.timers = timers;
    }

    pub fn overflow_ms(&self, station: StationId) -> f32 {
        self.timers.get(&station).copied().unwrap_or(0.0)
    }

    pub fn longest_ms(&self) -> f32 {
        self.timers.values().copied().fold(0.0, f32::max)
    }

    /// A run fails when a station stays full too long or any queue grows
    /// past the threshold.
    pub fn is_failed(&self, max_queue: usize, failure: &FailureParams) -> bool {
        self.longest_ms() >= failure.overflow_timeout_ms || max_queue > failure.queue_threshold
    }
}

// ---------------------------------------------------------------------------
// System
// ---------------------------------------------------------------------------

/// Snapshot the network into `CurrentObservation`. Overflow timers only
/// advance on ticks where the network clock moved.
pub fn build_observation(
    tick_counter: Res<TickCounter>,
    params: Res<NetworkParams>,
    network: Res<TransitNetwork>,
    action_log: Res<ActionResultLog>,
    mut tracker: ResMut<OverflowTracker>,
    mut current: ResMut<CurrentObservation>,
) {
    let components = &network.components;
    if tracker.seen_game_time != network.game_time() {
        tracker.seen_game_time = network.game_time();
        tracker.update(&components.stations, network.scaled_dt(params.tick_ms));
    }

    let max_queue = components.max_queue();

    let stations = components
        .stations
        .iter()
        .map(|s| StationSnapshot {
            id: s.id,
            shape: s.shape,
            position: (s.position.x, s.position.y),
            waiting: s.occupation(),
            capacity: s.capacity,
            overflow_ms: tracker.overflow_ms(s.id),
        })
        .collect();

    let paths = components
        .paths
        .iter()
        .filter(|p| !p.is_being_created)
        .map(|p| PathSnapshot {
            id: p.id,
            stations: p.station_ids().collect(),
            looped: p.is_looped(),
            metros: p
                .metros()
                .iter()
                .map(|m| MetroSnapshot {
                    id: m.id,
                    position: (m.position.x, m.position.y),
                    passengers: m.occupation(),
                    docked_at: m.docked_station(),
                })
                .collect(),
        })
        .collect();

    let recent_action_results = action_log
        .recent(10)
        .map(|(action, result)| {
            let mut summary = format!("{:?}", action);
            summary.truncate(100);
            ActionResultEntry {
                action_summary: summary,
                success: result.is_success(),
            }
        })
        .collect();

    current.observation = NetworkObservation {
        tick: tick_counter.0,
        game_time: network.game_time(),
        speed: components.status.game_speed,
        paused: components.status.is_paused,
        score: network.score(),
        max_queue,
        total_waiting: components.total_waiting(),
        failed: tracker.is_failed(max_queue, &params.failure),
        num_paths: components.paths.len(),
        paths_left: network.paths_left(),
        metros_left: components
            .lines
            .max_metros
            .saturating_sub(components.metro_count()),
        editing: network.path_manager.is_editing(),
        stations,
        paths,
        recent_action_results,
    };
}
