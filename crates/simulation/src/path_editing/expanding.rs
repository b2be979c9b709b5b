use bevy::log::{debug, info};

use super::creating::extend_from_end;
use super::PathEdit;
use crate::network::NetworkComponents;
use crate::path::{Path, PathId};
use crate::station::{StationId, StationRef};

/// Extending an existing open path at one of its two ends.
///
/// A single accepted station finalizes the session; aborting keeps the path
/// as it was.
#[derive(Debug, Clone)]
pub struct ExpandingPath {
    path_id: PathId,
    from_end: bool,
    active: bool,
}

/// Mirror of [`extend_from_end`] for the first station.
fn extend_from_start(path: &mut Path, station: StationRef) {
    if path.is_first(station.id) {
        return;
    }
    debug_assert!(!path.is_looped());
    if path.stations().len() > 2 && path.is_last(station.id) {
        path.set_loop();
        info!("path {} closed into a loop", path.id);
        return;
    }
    if !path.contains(station.id) {
        path.insert_station(0, station);
    }
}

impl ExpandingPath {
    /// `from_end` selects the last station as the attachment point,
    /// otherwise the first.
    pub fn new(path_id: PathId, from_end: bool) -> Self {
        Self {
            path_id,
            from_end,
            active: true,
        }
    }

    pub fn from_end(&self) -> bool {
        self.from_end
    }

    fn stop(&mut self, network: &mut NetworkComponents) {
        if let Some(path) = network.path_mut(self.path_id) {
            path.temporary_point = None;
            path.preview_from_start = false;
            path.selected = false;
        }
        self.active = false;
    }
}

impl PathEdit for ExpandingPath {
    fn path_id(&self) -> PathId {
        self.path_id
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn add_station(&mut self, network: &mut NetworkComponents, station: StationId) {
        debug_assert!(self.active);
        let Some(station) = network.station_ref(station) else {
            return;
        };
        let from_end = self.from_end;
        let Some(path) = network.path_mut(self.path_id) else {
            self.active = false;
            return;
        };
        if path.contains(station.id) {
            let opposite_end = if from_end {
                path.is_first(station.id)
            } else {
                path.is_last(station.id)
            };
            if !opposite_end {
                return;
            }
        }
        if from_end {
            extend_from_end(path, station);
        } else {
            extend_from_start(path, station);
        }
        debug!("path {} expanded with station {}", self.path_id, station.id);
        self.stop(network);
    }

    fn try_end_on_station(&mut self, network: &mut NetworkComponents, station: StationId) {
        debug_assert!(self.active);
        let on_path = network
            .path(self.path_id)
            .is_some_and(|path| path.contains(station));
        if on_path {
            self.stop(network);
        } else {
            self.abort(network);
        }
    }

    fn try_end_on_last_station(&mut self, network: &mut NetworkComponents) {
        self.stop(network);
    }

    fn abort(&mut self, network: &mut NetworkComponents) {
        debug!("path {} expansion aborted", self.path_id);
        self.stop(network);
    }
}
