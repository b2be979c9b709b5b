use std::path::{Path, PathBuf};

use bevy::log::LogPlugin;
use bevy::prelude::*;
use clap::Parser;

use simulation::game_actions::{ActionQueue, ActionSource, GameAction};
use simulation::network_params::NetworkParams;
use simulation::observation_builder::CurrentObservation;
use simulation::sim_rng::{SimRng, DEFAULT_SEED};

mod agent_mode;

/// Ticks between progress lines in a headless run.
const REPORT_INTERVAL: u64 = 1_000;

/// Headless transit network simulation.
#[derive(Parser, Debug)]
#[command(name = "minimetro", version)]
struct Cli {
    /// Speak the NDJSON agent protocol on stdin/stdout instead of running
    #[arg(long)]
    agent: bool,

    /// Seed for station placement and passenger destinations
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Number of ticks in a headless run
    #[arg(long, default_value_t = 10_000)]
    ticks: u64,

    /// JSON file overriding the default network parameters
    #[arg(long)]
    params: Option<PathBuf>,

    /// JSON array of game actions queued before the first tick
    #[arg(long)]
    actions: Option<PathBuf>,
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, String> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    serde_json::from_str(&text).map_err(|e| format!("cannot parse {}: {e}", path.display()))
}

/// Build the headless simulation app. `log` installs Bevy's `LogPlugin`.
pub(crate) fn build_app(params: NetworkParams, seed: u64, log: bool) -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    if log {
        app.add_plugins(LogPlugin::default());
    }
    app.insert_resource(params);
    app.insert_resource(SimRng::from_seed_u64(seed));
    app.add_plugins(simulation::SimulationPlugin);
    app.finish();
    app.cleanup();
    app
}

/// Run one simulation tick by executing the `FixedUpdate` schedule directly.
pub(crate) fn tick(app: &mut App) {
    app.world_mut().run_schedule(FixedUpdate);
}

fn run_headless(params: NetworkParams, cli: &Cli) -> Result<(), String> {
    let actions: Vec<GameAction> = match &cli.actions {
        Some(path) => read_json(path)?,
        None => Vec::new(),
    };

    let mut app = build_app(params, cli.seed, true);
    {
        let mut queue = app.world_mut().resource_mut::<ActionQueue>();
        for action in actions {
            queue.push(0, ActionSource::Player, action);
        }
    }
    info!(
        "headless run: seed {}, {} ticks",
        cli.seed, cli.ticks
    );

    for n in 1..=cli.ticks {
        tick(&mut app);
        let observation = &app.world().resource::<CurrentObservation>().observation;
        if observation.failed {
            warn!(
                "network failed at tick {} (score {}, max queue {})",
                n, observation.score, observation.max_queue
            );
            return Ok(());
        }
        if n % REPORT_INTERVAL == 0 {
            info!(
                "tick {}: score {}, waiting {}, max queue {}, paths {}",
                n,
                observation.score,
                observation.total_waiting,
                observation.max_queue,
                observation.num_paths
            );
        }
    }

    let observation = &app.world().resource::<CurrentObservation>().observation;
    info!(
        "finished {} ticks with score {}",
        cli.ticks, observation.score
    );
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    let params = match &cli.params {
        Some(path) => read_json(path),
        None => Ok(NetworkParams::default()),
    };
    let result = params.and_then(|params| {
        if cli.agent {
            agent_mode::run_agent_mode(params, cli.seed)
                .map_err(|e| format!("agent mode I/O error: {e}"))
        } else {
            run_headless(params, &cli)
        }
    });

    if let Err(message) = result {
        eprintln!("{message}");
        std::process::exit(1);
    }
}
