//! Owner of the single network-wide editing session.
//!
//! Every editing entry point goes through [`PathManager`], which refuses to
//! start a session while another one is active and routes input commands to
//! whichever session is running.

use bevy::log::debug;
use bevy::math::Vec2;

use crate::network::NetworkComponents;
use crate::path::PathId;
use crate::path_editing::{
    CreatingPath, EditCommand, EditError, EditingIntermediateStations, ExpandingPath, PathEdit,
    SessionFlow,
};
use crate::station::StationId;

#[derive(Debug, Clone)]
pub enum EditingSession {
    Creating(CreatingPath),
    Expanding(ExpandingPath),
    Intermediate(EditingIntermediateStations),
}

impl EditingSession {
    pub fn path_id(&self) -> PathId {
        match self {
            EditingSession::Creating(s) => s.path_id(),
            EditingSession::Expanding(s) => s.path_id(),
            EditingSession::Intermediate(s) => s.path_id(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PathManager {
    session: Option<EditingSession>,
}

impl PathManager {
    pub fn session(&self) -> Option<&EditingSession> {
        self.session.as_ref()
    }

    pub fn is_editing(&self) -> bool {
        self.session.is_some()
    }

    pub fn is_editing_intermediate(&self) -> bool {
        matches!(self.session, Some(EditingSession::Intermediate(_)))
    }

    fn ensure_idle(&self) -> Result<(), EditError> {
        if self.session.is_some() {
            return Err(EditError::SessionActive);
        }
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Starting sessions
    // -------------------------------------------------------------------------

    /// Begin drawing a new path at `station`.
    pub fn start_path_on_station(
        &mut self,
        network: &mut NetworkComponents,
        station: StationId,
    ) -> Result<PathId, EditError> {
        self.ensure_idle()?;
        let station_ref = network
            .station_ref(station)
            .ok_or(EditError::StationNotFound(station))?;
        if network.paths.len() >= network.lines.max_paths {
            return Err(EditError::PathLimitReached);
        }
        let path_id = network.create_path().ok_or(EditError::NoColorAvailable)?;
        if let Some(path) = network.path_mut(path_id) {
            path.is_being_created = true;
            path.selected = true;
            path.add_station(station_ref);
        }
        debug!("creating path {} from station {}", path_id, station);
        self.session = Some(EditingSession::Creating(CreatingPath::new(path_id)));
        Ok(path_id)
    }

    /// Begin extending the `index`-th path (in creation order) that stops at
    /// `station`. The station must be a terminus of an open path.
    pub fn start_expanding_path_on_station(
        &mut self,
        network: &mut NetworkComponents,
        station: StationId,
        index: usize,
    ) -> Result<PathId, EditError> {
        self.ensure_idle()?;
        if network.station(station).is_none() {
            return Err(EditError::StationNotFound(station));
        }
        let path_id = *network
            .paths_with_station(station)
            .get(index)
            .ok_or(EditError::NoPathAtStation(station))?;
        let path = network
            .path_mut(path_id)
            .ok_or(EditError::PathNotFound(path_id))?;
        if path.is_looped() {
            return Err(EditError::PathIsLooped(path_id));
        }
        let from_end = path.is_last(station);
        if !from_end && !path.is_first(station) {
            return Err(EditError::NotATerminus(station));
        }
        path.selected = true;
        path.preview_from_start = !from_end;
        debug!(
            "expanding path {} from its {} station",
            path_id,
            if from_end { "last" } else { "first" }
        );
        self.session = Some(EditingSession::Expanding(ExpandingPath::new(path_id, from_end)));
        Ok(path_id)
    }

    /// Begin an intermediate edit on the path segment under `position`.
    pub fn try_starting_path_edition(
        &mut self,
        network: &mut NetworkComponents,
        position: Vec2,
    ) -> Result<PathId, EditError> {
        self.ensure_idle()?;
        let width = network.lines.path_width;
        let (path_id, pair) = network
            .paths
            .iter()
            .filter(|p| !p.is_being_created)
            .find_map(|p| p.path_segment_at(position, width).map(|pair| (p.id, pair.ids())))
            .ok_or(EditError::NoSegmentAtPosition)?;
        self.start_editing_segment(network, path_id, pair)?;
        Ok(path_id)
    }

    /// Begin an intermediate edit on the path segment `segment` of `path_id`.
    pub fn start_editing_segment(
        &mut self,
        network: &mut NetworkComponents,
        path_id: PathId,
        segment: (StationId, StationId),
    ) -> Result<(), EditError> {
        self.ensure_idle()?;
        let path = network
            .path_mut(path_id)
            .ok_or(EditError::PathNotFound(path_id))?;
        if path.is_being_created || path.path_segment_index(segment).is_none() {
            return Err(EditError::NoSegmentAtPosition);
        }
        let (a, b) = segment;
        if path.occupied_segments().any(|kind| kind.joins(a, b)) {
            return Err(EditError::SegmentOccupied);
        }
        path.selected = true;
        debug!("editing segment {}-{} of path {}", a, b, path_id);
        self.session = Some(EditingSession::Intermediate(EditingIntermediateStations::new(
            path_id, segment,
        )));
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Driving sessions
    // -------------------------------------------------------------------------

    /// Feed one input command to the active session.
    pub fn handle_command(
        &mut self,
        network: &mut NetworkComponents,
        command: EditCommand,
    ) -> Result<SessionFlow, EditError> {
        let session = self.session.take().ok_or(EditError::NoActiveSession)?;
        match session {
            EditingSession::Creating(mut s) => {
                let flow = s.handle(network, command);
                if flow == SessionFlow::Continue {
                    self.session = Some(EditingSession::Creating(s));
                }
                Ok(flow)
            }
            EditingSession::Expanding(mut s) => {
                let flow = s.handle(network, command);
                if flow == SessionFlow::Continue {
                    self.session = Some(EditingSession::Expanding(s));
                }
                Ok(flow)
            }
            EditingSession::Intermediate(s) => {
                let result = match command {
                    EditCommand::Motion(station) => s.touch(network, station),
                    EditCommand::Up(_) | EditCommand::Down => Ok(()),
                };
                s.stop(network);
                result.map(|()| SessionFlow::Done)
            }
        }
    }

    /// Insert or remove `station` on the segment being edited. Ends the
    /// intermediate session whatever the outcome.
    pub fn touch(&mut self, network: &mut NetworkComponents, station: StationId) -> Result<(), EditError> {
        if !self.is_editing_intermediate() {
            return Err(EditError::NoActiveSession);
        }
        self.handle_command(network, EditCommand::Motion(station))
            .map(|_| ())
    }

    pub fn stop_edition(&mut self, network: &mut NetworkComponents) -> Result<(), EditError> {
        if !self.is_editing_intermediate() {
            return Err(EditError::NoActiveSession);
        }
        self.handle_command(network, EditCommand::Down).map(|_| ())
    }

    /// Move the preview point of whichever session is running.
    pub fn set_temporary_point(&mut self, network: &mut NetworkComponents, point: Vec2) {
        match &mut self.session {
            Some(EditingSession::Intermediate(s)) => s.temporary_point = Some(point),
            Some(session) => {
                if let Some(path) = network.path_mut(session.path_id()) {
                    path.temporary_point = Some(point);
                }
            }
            None => {}
        }
    }

    /// Abort whatever session involves `path_id`, then delete the path.
    pub fn remove_path(&mut self, network: &mut NetworkComponents, path_id: PathId) -> Result<(), EditError> {
        if network.path(path_id).is_none() {
            return Err(EditError::PathNotFound(path_id));
        }
        if self.session.as_ref().is_some_and(|s| s.path_id() == path_id) {
            match self.session.take() {
                Some(EditingSession::Creating(mut s)) => s.abort(network),
                Some(EditingSession::Expanding(mut s)) => s.abort(network),
                Some(EditingSession::Intermediate(s)) => s.stop(network),
                None => {}
            }
        }
        network.remove_path(path_id);
        Ok(())
    }
}
