use bevy::log::{info, warn};

use super::types::{EngineStatus, IdAllocator};
use crate::metro::Metro;
use crate::network_params::LineParams;
use crate::passenger::PassengerHolder;
use crate::path::{Path, PathId};
use crate::path_colors::PathColorManager;
use crate::station::{Station, StationId, StationRef};

/// Everything the engine mutates in a tick: stations (with their queues),
/// paths (with their metros and riders), color slots and status.
#[derive(Debug, Clone)]
pub struct NetworkComponents {
    pub stations: Vec<Station>,
    pub paths: Vec<Path>,
    pub colors: PathColorManager,
    pub status: EngineStatus,
    pub lines: LineParams,
    pub(crate) ids: IdAllocator,
}

impl NetworkComponents {
    pub fn new(stations: Vec<Station>, lines: LineParams) -> Self {
        Self {
            stations,
            paths: Vec::new(),
            colors: PathColorManager::new(lines.max_paths),
            status: EngineStatus::default(),
            lines,
            ids: IdAllocator::default(),
        }
    }

    // -------------------------------------------------------------------------
    // Lookups
    // -------------------------------------------------------------------------

    pub fn station(&self, id: StationId) -> Option<&Station> {
        self.stations.iter().find(|s| s.id == id)
    }

    pub fn station_mut(&mut self, id: StationId) -> Option<&mut Station> {
        self.stations.iter_mut().find(|s| s.id == id)
    }

    pub fn station_ref(&self, id: StationId) -> Option<StationRef> {
        self.station(id).map(Station::as_ref)
    }

    pub fn path(&self, id: PathId) -> Option<&Path> {
        self.paths.iter().find(|p| p.id == id)
    }

    pub fn path_mut(&mut self, id: PathId) -> Option<&mut Path> {
        self.paths.iter_mut().find(|p| p.id == id)
    }

    /// Paths stopping at `station`, in creation order.
    pub fn paths_with_station(&self, station: StationId) -> Vec<PathId> {
        self.paths
            .iter()
            .filter(|p| p.contains(station))
            .map(|p| p.id)
            .collect()
    }

    pub fn metros(&self) -> impl Iterator<Item = &Metro> {
        self.paths.iter().flat_map(|p| p.metros().iter())
    }

    pub fn metro_count(&self) -> usize {
        self.paths.iter().map(|p| p.metros().len()).sum()
    }

    /// Passengers queued at stations.
    pub fn total_waiting(&self) -> usize {
        self.stations.iter().map(|s| s.occupation()).sum()
    }

    /// Longest station queue.
    pub fn max_queue(&self) -> usize {
        self.stations.iter().map(|s| s.occupation()).max().unwrap_or(0)
    }

    pub fn passenger_count(&self) -> usize {
        self.total_waiting() + self.metros().map(|m| m.occupation()).sum::<usize>()
    }

    // -------------------------------------------------------------------------
    // Lifecycle
    // -------------------------------------------------------------------------

    /// Create an empty path in the first free color slot.
    pub fn create_path(&mut self) -> Option<PathId> {
        let id = self.ids.peek_path();
        let (color, order) = self.colors.assign(id)?;
        let id = self.ids.next_path();
        self.paths
            .push(Path::new(id, color, order, self.lines.path_order_shift));
        Some(id)
    }

    pub fn new_metro(&mut self, path: PathId) -> Metro {
        Metro::new(
            self.ids.next_metro(),
            path,
            self.lines.metro_capacity,
            self.lines.metro_speed_per_ms,
        )
    }

    /// Remove a path, its color reservation and its metros. Riders are put
    /// back at the station they last docked at (capacity is not enforced),
    /// and every passenger whose plan boarded this path is re-planned.
    pub fn remove_path(&mut self, id: PathId) -> Option<Path> {
        let index = self.paths.iter().position(|p| p.id == id)?;
        let mut path = self.paths.remove(index);
        self.colors.release(id);

        for mut metro in path.take_metros() {
            for mut passenger in metro.passengers.drain(..) {
                passenger.travel_plan = None;
                let home = passenger
                    .last_station
                    .and_then(|s| self.stations.iter().position(|st| st.id == s));
                match home {
                    Some(i) => self.stations[i].add_passenger(passenger),
                    None => warn!(
                        "passenger {} on path {} had no station to return to",
                        passenger.id,
                        id
                    ),
                }
            }
        }
        for station in &mut self.stations {
            for passenger in &mut station.passengers {
                if passenger.next_path() == Some(id) {
                    passenger.travel_plan = None;
                }
            }
        }
        if !path.is_being_created {
            info!("path {} removed", id);
        }
        Some(path)
    }
}
