use bevy::log::debug;
use bevy::math::Vec2;

use super::EditError;
use crate::network::NetworkComponents;
use crate::path::PathId;
use crate::station::StationId;

/// One-shot edit of a single path segment: insert a station into it, or
/// remove a station from the path.
#[derive(Debug, Clone)]
pub struct EditingIntermediateStations {
    path_id: PathId,
    segment: (StationId, StationId),
    /// Where the segment is being dragged to, for the preview.
    pub temporary_point: Option<Vec2>,
}

impl EditingIntermediateStations {
    pub fn new(path_id: PathId, segment: (StationId, StationId)) -> Self {
        Self {
            path_id,
            segment,
            temporary_point: None,
        }
    }

    pub fn path_id(&self) -> PathId {
        self.path_id
    }

    pub fn segment(&self) -> (StationId, StationId) {
        self.segment
    }

    /// Insert `station` into the edited segment, or remove it from the path
    /// when it is already on it.
    ///
    /// Refused when a metro travels on any segment the edit would replace.
    pub fn touch(&self, network: &mut NetworkComponents, station: StationId) -> Result<(), EditError> {
        let station_ref = network
            .station_ref(station)
            .ok_or(EditError::StationNotFound(station))?;
        let path = network
            .path_mut(self.path_id)
            .ok_or(EditError::PathNotFound(self.path_id))?;

        if path.contains(station) {
            if path.stations().len() <= 2 {
                return Err(EditError::TooFewStations);
            }
            if path.occupied_segments().any(|kind| kind.contains_station(station)) {
                return Err(EditError::SegmentOccupied);
            }
            path.remove_station(station);
            debug!("station {} removed from path {}", station, self.path_id);
        } else {
            let (a, b) = self.segment;
            let index = path
                .path_segment_index(self.segment)
                .ok_or(EditError::NoSegmentAtPosition)?;
            if path.occupied_segments().any(|kind| kind.joins(a, b)) {
                return Err(EditError::SegmentOccupied);
            }
            path.insert_station(index + 1, station_ref);
            debug!(
                "station {} inserted between {} and {} on path {}",
                station, a, b, self.path_id
            );
        }
        Ok(())
    }

    pub fn stop(&self, network: &mut NetworkComponents) {
        if let Some(path) = network.path_mut(self.path_id) {
            path.selected = false;
        }
    }

    /// Preview polyline: segment start, dragged point, segment end.
    pub fn preview(&self, network: &NetworkComponents) -> Option<[Vec2; 3]> {
        let point = self.temporary_point?;
        let (a, b) = self.segment;
        let start = network.station(a)?.position;
        let end = network.station(b)?.position;
        Some([start, point, end])
    }
}
