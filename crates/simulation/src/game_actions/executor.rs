//! Action executor system: drains the [`ActionQueue`] each fixed-update tick
//! and applies every queued [`GameAction`] to the [`TransitNetwork`],
//! recording results in the [`ActionResultLog`].
//!
//! Editing actions go through the same session machinery as interactive
//! input, so they obey the same rules (one session at a time, occupied
//! segments are left alone, and so on).

use std::collections::BTreeSet;

use bevy::prelude::*;

use crate::network::TransitNetwork;
use crate::network_params::NetworkParams;
use crate::path::PathId;
use crate::path_editing::EditCommand;
use crate::sim_rng::SimRng;
use crate::station::StationId;

use super::result_log::ActionResultLog;
use super::{ActionError, ActionQueue, ActionResult, GameAction};

// ---------------------------------------------------------------------------
// System
// ---------------------------------------------------------------------------

/// Drains all pending actions from the queue and executes them in order.
pub fn execute_queued_actions(
    mut queue: ResMut<ActionQueue>,
    mut log: ResMut<ActionResultLog>,
    mut network: ResMut<TransitNetwork>,
    mut rng: ResMut<SimRng>,
    params: Res<NetworkParams>,
) {
    for queued in queue.drain() {
        let result = execute_action(&queued.action, &mut network, &mut rng, &params);
        if let ActionResult::Error(error) = &result {
            warn!(
                "{:?} action {:?} refused: {:?}",
                queued.source, queued.action, error
            );
        }
        log.push(queued.action, result);
    }
}

// ---------------------------------------------------------------------------
// Dispatcher
// ---------------------------------------------------------------------------

/// Apply one action immediately.
pub fn execute_action(
    action: &GameAction,
    network: &mut TransitNetwork,
    rng: &mut SimRng,
    params: &NetworkParams,
) -> ActionResult {
    match action {
        GameAction::NewGame { seed } => {
            rng.reseed(*seed);
            *network = TransitNetwork::generate(params, &mut rng.0);
            info!("new game with seed {}", seed);
            ActionResult::Success
        }
        GameAction::SetPaused { paused } => network
            .set_paused(*paused)
            .map_err(ActionError::from)
            .into(),
        GameAction::SetSpeed { speed } => execute_set_speed(*speed, network),
        GameAction::AllowSteps { steps } => {
            network.allow_steps(*steps);
            ActionResult::Success
        }
        GameAction::CreatePath {
            stations,
            close_loop,
        } => execute_create_path(stations, *close_loop, network).into(),
        GameAction::ExpandPath { path, from, to } => {
            execute_expand_path(*path, *from, *to, network).into()
        }
        GameAction::RemovePath { path } => network
            .remove_path(*path)
            .map_err(ActionError::from)
            .into(),
        GameAction::InsertStation {
            path,
            segment_start,
            segment_end,
            station,
        } => execute_insert_station(*path, (*segment_start, *segment_end), *station, network)
            .into(),
        GameAction::RemoveStation { path, station } => {
            execute_remove_station(*path, *station, network).into()
        }
        GameAction::StartPath { station } => network
            .start_path_on_station(*station)
            .map(|_| ())
            .map_err(ActionError::from)
            .into(),
        GameAction::StartExpanding { station, index } => network
            .start_expanding_path_on_station(*station, *index)
            .map(|_| ())
            .map_err(ActionError::from)
            .into(),
        GameAction::Gesture { command } => network
            .handle_command(*command)
            .map(|_| ())
            .map_err(ActionError::from)
            .into(),
    }
}

// ---------------------------------------------------------------------------
// Execution functions
// ---------------------------------------------------------------------------

fn execute_set_speed(speed: u32, network: &mut TransitNetwork) -> ActionResult {
    let applied = network.set_speed(speed);
    if applied == speed {
        ActionResult::Success
    } else {
        ActionResult::SuccessWithWarning(format!("speed clamped to {applied}"))
    }
}

fn execute_create_path(
    stations: &[StationId],
    close_loop: bool,
    network: &mut TransitNetwork,
) -> Result<(), ActionError> {
    if stations.len() < 2 {
        return Err(ActionError::InvalidParameter(
            "a path needs at least two stations".into(),
        ));
    }
    if close_loop && stations.len() < 3 {
        return Err(ActionError::InvalidParameter(
            "a loop needs at least three stations".into(),
        ));
    }
    let unique: BTreeSet<StationId> = stations.iter().copied().collect();
    if unique.len() != stations.len() {
        return Err(ActionError::InvalidParameter(
            "stations must not repeat".into(),
        ));
    }
    if stations
        .iter()
        .any(|&s| network.components.station(s).is_none())
    {
        return Err(ActionError::NotFound);
    }

    network.start_path_on_station(stations[0])?;
    for &station in &stations[1..] {
        network.handle_command(EditCommand::Motion(station))?;
    }
    let last = if close_loop {
        EditCommand::Motion(stations[0])
    } else {
        EditCommand::Up(None)
    };
    network.handle_command(last)?;
    Ok(())
}

fn execute_expand_path(
    path: PathId,
    from: StationId,
    to: StationId,
    network: &mut TransitNetwork,
) -> Result<(), ActionError> {
    if network.components.station(to).is_none() {
        return Err(ActionError::NotFound);
    }
    let index = network
        .components
        .paths_with_station(from)
        .iter()
        .position(|&p| p == path)
        .ok_or(ActionError::NotFound)?;
    let shape_of = |network: &TransitNetwork| {
        network
            .components
            .path(path)
            .map(|p| (p.stations().len(), p.is_looped()))
    };
    let before = shape_of(&*network);

    network.start_expanding_path_on_station(from, index)?;
    network.handle_command(EditCommand::Motion(to))?;
    if network.path_manager.is_editing() {
        network.handle_command(EditCommand::Down)?;
    }

    if shape_of(&*network) == before {
        return Err(ActionError::AlreadyExists);
    }
    Ok(())
}

fn execute_insert_station(
    path: PathId,
    segment: (StationId, StationId),
    station: StationId,
    network: &mut TransitNetwork,
) -> Result<(), ActionError> {
    let target = network.components.path(path).ok_or(ActionError::NotFound)?;
    if target.contains(station) {
        return Err(ActionError::AlreadyExists);
    }
    network.start_editing_segment(path, segment)?;
    network.touch(station)?;
    Ok(())
}

fn execute_remove_station(
    path: PathId,
    station: StationId,
    network: &mut TransitNetwork,
) -> Result<(), ActionError> {
    let segment = network
        .components
        .path(path)
        .ok_or(ActionError::NotFound)?
        .path_segments()
        .find(|s| s.kind.contains_station(station))
        .and_then(|s| s.kind.station_pair())
        .map(|pair| pair.ids())
        .ok_or(ActionError::NotFound)?;
    network.start_editing_segment(path, segment)?;
    network.touch(station)?;
    Ok(())
}
