//! # TestNetwork — headless integration test harness
//!
//! Provides a fluent builder that wraps `bevy::app::App` + `SimulationPlugin`
//! for running integration tests without a window or renderer.

mod assertions;
mod queries;
mod setup;

use bevy::app::App;
use bevy::prelude::*;

use crate::network_params::NetworkParams;
use crate::sim_rng::{SimRng, DEFAULT_SEED};
use crate::SimulationPlugin;

/// A headless Bevy App wrapping `SimulationPlugin` for integration testing.
///
/// Use builder methods to lay out stations and paths, then call `tick()` to
/// advance the simulation and query/assert on the resulting state.
pub struct TestNetwork {
    app: App,
}

impl Default for TestNetwork {
    fn default() -> Self {
        Self::new()
    }
}

impl TestNetwork {
    // -----------------------------------------------------------------------
    // Constructors
    // -----------------------------------------------------------------------

    /// A generated network with default parameters and the default seed.
    pub fn new() -> Self {
        Self::with_params(NetworkParams::default(), DEFAULT_SEED)
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::with_params(NetworkParams::default(), seed)
    }

    /// Build the app around explicit parameters and seed.
    pub fn with_params(params: NetworkParams, seed: u64) -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);

        // Insert BEFORE SimulationPlugin so the network is generated from them.
        app.insert_resource(params);
        app.insert_resource(SimRng::from_seed_u64(seed));
        app.add_plugins(SimulationPlugin);

        // No `app.update()`: ticks are driven explicitly through `tick()`.
        app.finish();
        app.cleanup();

        Self { app }
    }
}
