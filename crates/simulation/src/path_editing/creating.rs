use bevy::log::{debug, info};

use super::PathEdit;
use crate::network::NetworkComponents;
use crate::path::{Path, PathId};
use crate::station::{StationId, StationRef};

/// Drawing a brand-new path, always from its open end.
#[derive(Debug, Clone)]
pub struct CreatingPath {
    path_id: PathId,
    active: bool,
}

/// Extend `path` at its last station. Re-adding the last station does
/// nothing; touching the first station of a path with more than two
/// stations closes the loop; any other station already on the path is
/// ignored.
pub(super) fn extend_from_end(path: &mut Path, station: StationRef) {
    if path.is_last(station.id) {
        return;
    }
    debug_assert!(!path.is_looped());
    if path.stations().len() > 2 && path.is_first(station.id) {
        path.set_loop();
        info!("path {} closed into a loop", path.id);
        return;
    }
    if !path.contains(station.id) {
        path.add_station(station);
    }
}

impl CreatingPath {
    pub fn new(path_id: PathId) -> Self {
        Self {
            path_id,
            active: true,
        }
    }

    fn finish(&mut self, network: &mut NetworkComponents) {
        let can_add_metro = network.metro_count() < network.lines.max_metros;
        let metro = can_add_metro.then(|| network.new_metro(self.path_id));
        if let Some(path) = network.path_mut(self.path_id) {
            path.is_being_created = false;
            path.selected = false;
            path.temporary_point = None;
            if let Some(metro) = metro {
                path.add_metro(metro);
            }
            info!(
                "path {} created with {} stations",
                path.id,
                path.stations().len()
            );
        }
        self.active = false;
    }
}

impl PathEdit for CreatingPath {
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
        let Some(path) = network.path_mut(self.path_id) else {
            self.active = false;
            return;
        };
        extend_from_end(path, station);
        if path.is_looped() {
            self.finish(network);
        }
    }

    fn try_end_on_station(&mut self, network: &mut NetworkComponents, station: StationId) {
        debug_assert!(self.active);
        let can_end = match network.path(self.path_id) {
            Some(path) if path.contains(station) => {
                path.stations().len() > 1 && path.is_last(station)
            }
            _ => false,
        };
        if can_end {
            self.finish(network);
        } else {
            self.abort(network);
        }
    }

    fn try_end_on_last_station(&mut self, network: &mut NetworkComponents) {
        match network.path(self.path_id).and_then(Path::last_station) {
            Some(last) => self.try_end_on_station(network, last.id),
            None => self.abort(network),
        }
    }

    /// Discard the path being drawn and release its color.
    fn abort(&mut self, network: &mut NetworkComponents) {
        debug!("path {} creation aborted", self.path_id);
        network.remove_path(self.path_id);
        self.active = false;
    }
}
