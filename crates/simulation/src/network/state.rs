use bevy::log::{debug, info};
use bevy::math::Vec2;
use bevy::prelude::*;
use rand::Rng;

use super::components::NetworkComponents;
use crate::config::MAX_GAME_SPEED;
use crate::network_params::NetworkParams;
use crate::passenger_mover::move_passengers;
use crate::passenger_spawner::PassengerSpawner;
use crate::path::PathId;
use crate::path_editing::{EditCommand, EditError, SessionFlow};
use crate::path_manager::PathManager;
use crate::sim_rng::SimRng;
use crate::station::{generate_stations, Station, StationId};
use crate::travel_plan_finder::find_travel_plans;

/// The whole transit network: entities, the editing session and the spawn
/// countdown. Single source of truth for every engine system.
#[derive(Resource, Debug, Clone)]
pub struct TransitNetwork {
    pub components: NetworkComponents,
    pub path_manager: PathManager,
    pub spawner: PassengerSpawner,
    wave_due: bool,
}

impl FromWorld for TransitNetwork {
    fn from_world(world: &mut World) -> Self {
        let params = world
            .get_resource::<NetworkParams>()
            .cloned()
            .unwrap_or_default();
        let mut rng = world.get_resource_or_insert_with(SimRng::default);
        Self::generate(&params, &mut rng.0)
    }
}

impl TransitNetwork {
    pub fn new(params: &NetworkParams, stations: Vec<Station>) -> Self {
        Self {
            components: NetworkComponents::new(stations, params.lines.clone()),
            path_manager: PathManager::default(),
            spawner: PassengerSpawner::from_params(params),
            wave_due: false,
        }
    }

    /// A fresh network with randomly placed stations.
    pub fn generate(params: &NetworkParams, rng: &mut impl Rng) -> Self {
        let stations = generate_stations(&params.stations, rng);
        info!("generated network with {} stations", stations.len());
        Self::new(params, stations)
    }

    // -------------------------------------------------------------------------
    // Tick pipeline
    // -------------------------------------------------------------------------

    pub fn is_running(&self) -> bool {
        !self.components.status.is_paused
    }

    /// Tick duration after the game-speed multiplier.
    pub fn scaled_dt(&self, dt_ms: f32) -> f32 {
        dt_ms * self.components.status.game_speed as f32
    }

    /// Count the tick and run the spawn countdown.
    pub fn advance_clock(&mut self, dt_ms: f32) {
        self.components.status.game_time += 1;
        if self.spawner.tick(dt_ms) {
            self.wave_due = true;
        }
    }

    pub fn refresh_travel_plans(&mut self, rng: &mut impl Rng) {
        find_travel_plans(&mut self.components, rng);
    }

    /// Exchange passengers at docked metros. Returns the arrivals.
    pub fn transfer_passengers(&mut self) -> u32 {
        move_passengers(&mut self.components)
    }

    pub fn move_metros(&mut self, dt_ms: f32) {
        for path in &mut self.components.paths {
            path.move_metros(dt_ms);
        }
    }

    /// Spawn a wave if the countdown elapsed this tick.
    pub fn spawn_due_passengers(&mut self, rng: &mut impl Rng) -> usize {
        if !std::mem::take(&mut self.wave_due) {
            return 0;
        }
        let spawned = PassengerSpawner::spawn_wave(&mut self.components, rng);
        debug!("spawned {} passengers", spawned);
        spawned
    }

    /// Spend one step of a step-by-step budget, pausing when it runs out.
    pub fn consume_step_budget(&mut self) {
        let status = &mut self.components.status;
        if let Some(steps) = status.steps_allowed {
            let left = steps.saturating_sub(1);
            if left == 0 {
                status.steps_allowed = None;
                status.is_paused = true;
            } else {
                status.steps_allowed = Some(left);
            }
        }
    }

    /// Run one full engine tick of `dt_ms` (before speed scaling). Does
    /// nothing while paused.
    pub fn increment_time(&mut self, dt_ms: f32, rng: &mut impl Rng) {
        if !self.is_running() {
            return;
        }
        let dt = self.scaled_dt(dt_ms);
        self.advance_clock(dt);
        self.refresh_travel_plans(rng);
        self.transfer_passengers();
        self.move_metros(dt);
        self.spawn_due_passengers(rng);
        self.consume_step_budget();
    }

    // -------------------------------------------------------------------------
    // Run controls
    // -------------------------------------------------------------------------

    /// Flip the pause flag. Refused while an intermediate edit is open.
    /// Returns the new paused state.
    pub fn toggle_pause(&mut self) -> Result<bool, EditError> {
        let paused = !self.components.status.is_paused;
        self.set_paused(paused)?;
        Ok(paused)
    }

    pub fn set_paused(&mut self, paused: bool) -> Result<(), EditError> {
        if self.path_manager.is_editing_intermediate() {
            return Err(EditError::SessionActive);
        }
        let status = &mut self.components.status;
        status.is_paused = paused;
        if !paused {
            status.steps_allowed = None;
        }
        Ok(())
    }

    /// Set the game-speed multiplier, clamped to `1..=MAX_GAME_SPEED`.
    pub fn set_speed(&mut self, speed: u32) -> u32 {
        let speed = speed.clamp(1, MAX_GAME_SPEED);
        self.components.status.game_speed = speed;
        speed
    }

    /// Unpause for exactly `steps` ticks.
    pub fn allow_steps(&mut self, steps: u32) {
        let status = &mut self.components.status;
        if steps == 0 {
            status.is_paused = true;
            status.steps_allowed = None;
            return;
        }
        status.steps_allowed = Some(steps);
        status.is_paused = false;
    }

    // -------------------------------------------------------------------------
    // Editing
    // -------------------------------------------------------------------------

    pub fn start_path_on_station(&mut self, station: StationId) -> Result<PathId, EditError> {
        self.path_manager
            .start_path_on_station(&mut self.components, station)
    }

    pub fn start_expanding_path_on_station(
        &mut self,
        station: StationId,
        index: usize,
    ) -> Result<PathId, EditError> {
        self.path_manager
            .start_expanding_path_on_station(&mut self.components, station, index)
    }

    pub fn try_starting_path_edition(&mut self, position: Vec2) -> Result<PathId, EditError> {
        self.path_manager
            .try_starting_path_edition(&mut self.components, position)
    }

    pub fn start_editing_segment(
        &mut self,
        path: PathId,
        segment: (StationId, StationId),
    ) -> Result<(), EditError> {
        self.path_manager
            .start_editing_segment(&mut self.components, path, segment)
    }

    pub fn handle_command(&mut self, command: EditCommand) -> Result<SessionFlow, EditError> {
        self.path_manager
            .handle_command(&mut self.components, command)
    }

    pub fn touch(&mut self, station: StationId) -> Result<(), EditError> {
        self.path_manager.touch(&mut self.components, station)
    }

    pub fn stop_edition(&mut self) -> Result<(), EditError> {
        self.path_manager.stop_edition(&mut self.components)
    }

    pub fn set_temporary_point(&mut self, point: Vec2) {
        self.path_manager
            .set_temporary_point(&mut self.components, point);
    }

    pub fn remove_path(&mut self, path: PathId) -> Result<(), EditError> {
        self.path_manager.remove_path(&mut self.components, path)
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    pub fn stations(&self) -> &[Station] {
        &self.components.stations
    }

    pub fn station_at(&self, position: Vec2, radius: f32) -> Option<StationId> {
        self.components
            .stations
            .iter()
            .find(|s| s.position.distance(position) <= radius)
            .map(|s| s.id)
    }

    pub fn score(&self) -> u32 {
        self.components.status.score
    }

    pub fn game_time(&self) -> u64 {
        self.components.status.game_time
    }

    pub fn paths_left(&self) -> usize {
        self.components
            .lines
            .max_paths
            .saturating_sub(self.components.paths.len())
    }
}
