use std::fmt;

use crate::path::PathId;
use crate::station::StationId;

/// Why a path-editing operation was refused. The network is left unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    /// Another editing session is already running.
    SessionActive,
    /// No editing session to send the command to.
    NoActiveSession,
    PathLimitReached,
    NoColorAvailable,
    StationNotFound(StationId),
    PathNotFound(PathId),
    /// Fewer paths stop at the station than the requested index.
    NoPathAtStation(StationId),
    /// Expansion must start from either end of an open path.
    NotATerminus(StationId),
    PathIsLooped(PathId),
    NoSegmentAtPosition,
    /// A metro is travelling on a segment the edit would replace.
    SegmentOccupied,
    /// Removing the station would leave fewer than two.
    TooFewStations,
}

impl fmt::Display for EditError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditError::SessionActive => write!(f, "an editing session is already active"),
            EditError::NoActiveSession => write!(f, "no editing session is active"),
            EditError::PathLimitReached => write!(f, "maximum number of paths reached"),
            EditError::NoColorAvailable => write!(f, "no path color available"),
            EditError::StationNotFound(id) => write!(f, "station {id} does not exist"),
            EditError::PathNotFound(id) => write!(f, "path {id} does not exist"),
            EditError::NoPathAtStation(id) => write!(f, "no such path stops at station {id}"),
            EditError::NotATerminus(id) => write!(f, "station {id} is not an end of the path"),
            EditError::PathIsLooped(id) => write!(f, "path {id} is looped and cannot be expanded"),
            EditError::NoSegmentAtPosition => write!(f, "no path segment at that position"),
            EditError::SegmentOccupied => write!(f, "a metro occupies the affected segment"),
            EditError::TooFewStations => write!(f, "a path needs at least two stations"),
        }
    }
}

impl std::error::Error for EditError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_the_subject() {
        assert_eq!(EditError::PathNotFound(4).to_string(), "path 4 does not exist");
        assert_eq!(
            EditError::NotATerminus(2).to_string(),
            "station 2 is not an end of the path"
        );
    }

    #[test]
    fn test_is_std_error() {
        fn takes_error(_: &dyn std::error::Error) {}
        takes_error(&EditError::SegmentOccupied);
    }
}
