//! Deterministic simulation ordering via `SystemSet` phases.
//!
//! # FixedUpdate phases (`SimulationSet`)
//!
//! ```text
//! PreSim  →  Simulation  →  PostSim
//! ```
//!
//! * **PreSim** – Tick counter, queued game actions, network clock and spawn
//!   timer. Everything an external caller asked for lands before the
//!   network moves.
//! * **Simulation** – Travel-plan refresh, passenger transfers at docked
//!   metros, metro movement, passenger spawning. Chained, single-threaded.
//! * **PostSim** – Step budget bookkeeping and the observation snapshot.
//!   These read the network after it settled for the tick.

use bevy::prelude::*;

/// Ordered phases for systems running in the `FixedUpdate` schedule.
///
/// Configured as a chain: `PreSim` → `Simulation` → `PostSim`.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    PreSim,
    Simulation,
    PostSim,
}
