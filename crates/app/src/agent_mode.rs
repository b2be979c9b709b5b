//! Headless `--agent` mode: a blocking synchronous loop that reads JSON
//! commands from stdin and writes JSON responses to stdout.
//!
//! ## Protocol
//!
//! Each line of stdin is a JSON object with a `"cmd"` discriminator.
//! Each line of stdout is a JSON response with `"protocol_version"` and
//! `"type"` fields. See [`simulation::agent_protocol`] for the full schema.
//! Diagnostics go to stderr so stdout stays pure JSON.

use std::io::{self, BufRead, Write};

use bevy::app::App;

use simulation::agent_protocol::{
    make_response, AgentCommand, AgentResponse, ResponsePayload, PROTOCOL_VERSION,
};
use simulation::game_actions::{ActionQueue, ActionResult, ActionResultLog, ActionSource, GameAction};
use simulation::network_params::NetworkParams;
use simulation::observation_builder::CurrentObservation;
use simulation::TickCounter;

use crate::{build_app, tick};

/// Upper bound on ticks per `step` command.
const MAX_STEP_TICKS: u64 = 10_000;

pub fn run_agent_mode(params: NetworkParams, seed: u64) -> io::Result<()> {
    let mut app = build_app(params, seed, false);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    // Tell the external program we are live.
    send(&mut stdout, &make_response(ResponsePayload::Ready))?;
    eprintln!(
        "minimetro agent mode v{} ready, seed {}, waiting for commands on stdin",
        PROTOCOL_VERSION, seed
    );

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("stdin read error: {e}");
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<AgentCommand>(&line) {
            Ok(cmd) => process_command(cmd, &mut app),
            Err(e) => make_response(ResponsePayload::Error {
                message: format!("Parse error: {e}"),
            }),
        };
        let is_goodbye = matches!(response.payload, ResponsePayload::Goodbye);
        send(&mut stdout, &response)?;
        if is_goodbye {
            break;
        }
    }

    eprintln!("minimetro agent mode shutting down");
    Ok(())
}

fn send(out: &mut impl Write, response: &AgentResponse) -> io::Result<()> {
    let json = serde_json::to_string(response).map_err(io::Error::other)?;
    writeln!(out, "{json}")?;
    out.flush()
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

fn current_tick(app: &App) -> u64 {
    app.world()
        .get_resource::<TickCounter>()
        .map(|t| t.0)
        .unwrap_or(0)
}

/// Queue `action`, run one tick so the executor picks it up, and report
/// what the executor logged.
fn act_and_tick(app: &mut App, action: GameAction) -> ActionResult {
    let tick_now = current_tick(app);
    app.world_mut()
        .resource_mut::<ActionQueue>()
        .push(tick_now, ActionSource::Agent, action);
    tick(app);
    app.world()
        .get_resource::<ActionResultLog>()
        .and_then(|log| log.last_result().cloned())
        .unwrap_or(ActionResult::Success)
}

fn process_command(cmd: AgentCommand, app: &mut App) -> AgentResponse {
    match cmd {
        AgentCommand::Observe => {
            let observation = app
                .world()
                .get_resource::<CurrentObservation>()
                .map(|co| co.observation.clone())
                .unwrap_or_default();
            make_response(ResponsePayload::Observation { observation })
        }

        AgentCommand::Act { action } => {
            let result = act_and_tick(app, action);
            make_response(ResponsePayload::ActionResult { result })
        }

        AgentCommand::BatchAct { actions } => {
            let results = actions
                .into_iter()
                .map(|action| act_and_tick(app, action))
                .collect();
            make_response(ResponsePayload::BatchResult { results })
        }

        AgentCommand::Step { ticks } => {
            for _ in 0..ticks.min(MAX_STEP_TICKS) {
                tick(app);
            }
            make_response(ResponsePayload::StepComplete {
                tick: current_tick(app),
            })
        }

        AgentCommand::NewGame { seed } => match act_and_tick(app, GameAction::NewGame { seed }) {
            ActionResult::Error(error) => make_response(ResponsePayload::Error {
                message: format!("new game failed: {error:?}"),
            }),
            _ => make_response(ResponsePayload::Ok),
        },

        AgentCommand::Quit => make_response(ResponsePayload::Goodbye),
    }
}
