//! Compact, typed, serializable snapshot of the transit network.
//!
//! `NetworkObservation` is what an automated player sees each turn: run
//! state, failure signals and one entry per station and path.

use serde::{Deserialize, Serialize};

use crate::metro::MetroId;
use crate::path::PathId;
use crate::station::{ShapeType, StationId};

// ---------------------------------------------------------------------------
// Top-level observation
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct NetworkObservation {
    // -- Time ---------------------------------------------------------------
    pub tick: u64,
    pub game_time: u64,
    pub speed: u32,
    pub paused: bool,

    // -- Outcome ------------------------------------------------------------
    pub score: u32,
    pub max_queue: usize,
    pub total_waiting: usize,
    pub failed: bool,

    // -- Network ------------------------------------------------------------
    pub num_paths: usize,
    pub paths_left: usize,
    pub metros_left: usize,
    pub editing: bool,
    pub stations: Vec<StationSnapshot>,
    pub paths: Vec<PathSnapshot>,

    // -- Recent action results ----------------------------------------------
    pub recent_action_results: Vec<ActionResultEntry>,
}

// ---------------------------------------------------------------------------
// Sub-snapshots
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StationSnapshot {
    pub id: StationId,
    pub shape: ShapeType,
    pub position: (f32, f32),
    pub waiting: usize,
    pub capacity: usize,
    /// How long the station has been full, in simulated ms.
    pub overflow_ms: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PathSnapshot {
    pub id: PathId,
    pub stations: Vec<StationId>,
    pub looped: bool,
    pub metros: Vec<MetroSnapshot>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MetroSnapshot {
    pub id: MetroId,
    pub position: (f32, f32),
    pub passengers: usize,
    pub docked_at: Option<StationId>,
}

/// Compact summary of a recently executed game action.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActionResultEntry {
    pub action_summary: String,
    pub success: bool,
}
