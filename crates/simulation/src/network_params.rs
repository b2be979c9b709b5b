//! Data-driven network parameters.
//!
//! Collects the tunables of the transit engine into a single
//! [`NetworkParams`] resource so they can be adjusted at runtime (by tests,
//! the headless driver, or an agent) without recompilation. Defaults mirror
//! the constants in [`crate::config`].

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::*;

// ---------------------------------------------------------------------------
// Sub-groups
// ---------------------------------------------------------------------------

/// Where and how densely stations are generated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationParams {
    pub count: usize,
    pub capacity: usize,
    pub min_distance: f32,
    pub world_width: f32,
    /// Playable height (the world minus the GUI strip).
    pub world_height: f32,
    pub padding_ratio: f32,
}

impl Default for StationParams {
    fn default() -> Self {
        Self {
            count: NUM_STATIONS,
            capacity: STATION_CAPACITY,
            min_distance: MIN_STATION_DISTANCE,
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT * (1.0 - GUI_HEIGHT_PROPORTION),
            padding_ratio: STATION_PADDING_RATIO,
        }
    }
}

/// Fleet and line limits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineParams {
    pub max_paths: usize,
    pub max_metros: usize,
    pub metro_capacity: usize,
    pub metro_speed_per_ms: f32,
    pub path_width: f32,
    pub path_order_shift: f32,
}

impl Default for LineParams {
    fn default() -> Self {
        Self {
            max_paths: MAX_PATHS,
            max_metros: MAX_METROS,
            metro_capacity: METRO_CAPACITY,
            metro_speed_per_ms: METRO_SPEED_PER_MS,
            path_width: PATH_WIDTH,
            path_order_shift: PATH_ORDER_SHIFT,
        }
    }
}

/// Thresholds that decide when a run counts as failed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailureParams {
    pub queue_threshold: usize,
    pub overflow_timeout_ms: f32,
}

impl Default for FailureParams {
    fn default() -> Self {
        Self {
            queue_threshold: FAIL_QUEUE_THRESHOLD,
            overflow_timeout_ms: OVERFLOW_TIMEOUT_MS,
        }
    }
}

// ---------------------------------------------------------------------------
// NetworkParams resource
// ---------------------------------------------------------------------------

/// Top-level resource holding every runtime-tunable network parameter.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkParams {
    pub stations: StationParams,
    pub lines: LineParams,
    pub failure: FailureParams,
    pub spawn_interval_ms: f32,
    pub first_spawn_divisor: f32,
    /// Simulated milliseconds per fixed tick at speed 1.
    pub tick_ms: f32,
}

impl Default for NetworkParams {
    fn default() -> Self {
        Self {
            stations: StationParams::default(),
            lines: LineParams::default(),
            failure: FailureParams::default(),
            spawn_interval_ms: PASSENGER_SPAWN_INTERVAL_MS,
            first_spawn_divisor: FIRST_SPAWN_DIVISOR,
            tick_ms: TICK_MS,
        }
    }
}

impl NetworkParams {
    /// Delay before the very first passenger wave.
    pub fn first_spawn_delay_ms(&self) -> f32 {
        self.spawn_interval_ms / self.first_spawn_divisor
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
