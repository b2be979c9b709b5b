use crate::path::{Path, PathId};
use crate::station::StationId;

/// Snapshot of which stations each finished path serves.
///
/// Lets the planner and the passenger mover answer membership questions
/// while the paths themselves are borrowed mutably.
#[derive(Debug, Clone, Default)]
pub struct LineIndex {
    lines: Vec<(PathId, Vec<StationId>)>,
}

impl LineIndex {
    pub fn from_paths(paths: &[Path]) -> Self {
        Self {
            lines: paths
                .iter()
                .filter(|p| !p.is_being_created)
                .map(|p| (p.id, p.station_ids().collect()))
                .collect(),
        }
    }

    pub fn serves(&self, station: StationId) -> bool {
        self.lines.iter().any(|(_, ids)| ids.contains(&station))
    }

    /// Whether `path` exists and stops at both `a` and `b`.
    pub fn path_serves_both(&self, path: PathId, a: StationId, b: StationId) -> bool {
        self.lines
            .iter()
            .any(|(id, ids)| *id == path && ids.contains(&a) && ids.contains(&b))
    }

    /// First path stopping at both stations.
    pub fn shared_path(&self, a: StationId, b: StationId) -> Option<PathId> {
        self.lines
            .iter()
            .find(|(_, ids)| ids.contains(&a) && ids.contains(&b))
            .map(|(id, _)| *id)
    }
}
