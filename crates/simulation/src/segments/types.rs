use std::hash::{Hash, Hasher};

use bevy::math::Vec2;

use crate::station::{StationId, StationRef};
use crate::travel_steps::Direction;

// =============================================================================
// Station groups
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StationPair {
    pub start: StationRef,
    pub end: StationRef,
}

impl StationPair {
    pub fn new(start: StationRef, end: StationRef) -> Self {
        Self { start, end }
    }

    pub fn ids(&self) -> (StationId, StationId) {
        (self.start.id, self.end.id)
    }
}

/// Three consecutive stations around a corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StationTriple {
    pub previous: StationRef,
    pub current: StationRef,
    pub next: StationRef,
}

// =============================================================================
// SegmentKind
// =============================================================================

/// Value identity of a segment. Two segments with equal kinds are the same
/// segment, which is what lets metros be re-pointed after a rebuild.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    Path(StationPair),
    Padding(StationTriple),
}

impl SegmentKind {
    pub fn is_path(&self) -> bool {
        matches!(self, SegmentKind::Path(_))
    }

    pub fn station_pair(&self) -> Option<StationPair> {
        match self {
            SegmentKind::Path(pair) => Some(*pair),
            SegmentKind::Padding(_) => None,
        }
    }

    pub fn contains_station(&self, id: StationId) -> bool {
        match self {
            SegmentKind::Path(pair) => pair.start.id == id || pair.end.id == id,
            SegmentKind::Padding(triple) => {
                triple.previous.id == id || triple.current.id == id || triple.next.id == id
            }
        }
    }

    /// Whether the consecutive stations `a`, `b` appear in this segment.
    pub fn joins(&self, a: StationId, b: StationId) -> bool {
        match self {
            SegmentKind::Path(pair) => pair.ids() == (a, b),
            SegmentKind::Padding(triple) => {
                (triple.previous.id, triple.current.id) == (a, b)
                    || (triple.current.id, triple.next.id) == (a, b)
            }
        }
    }

    /// Station reached when travelling this segment in `direction`; corners
    /// never end at a station.
    pub fn destination_station(&self, direction: Direction) -> Option<StationId> {
        match (self, direction) {
            (SegmentKind::Path(pair), Direction::Forward) => Some(pair.end.id),
            (SegmentKind::Path(pair), Direction::Backward) => Some(pair.start.id),
            (SegmentKind::Padding(_), _) => None,
        }
    }
}

// =============================================================================
// Segment
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentEdges {
    pub start: Vec2,
    pub end: Vec2,
}

impl SegmentEdges {
    pub fn endpoint(&self, direction: Direction) -> Vec2 {
        match direction {
            Direction::Forward => self.end,
            Direction::Backward => self.start,
        }
    }

    /// Distance from `point` to the edge, and the projection parameter
    /// along it (`0` at start, `1` at end, unclamped).
    pub fn project(&self, point: Vec2) -> (f32, f32) {
        let span = self.end - self.start;
        let length_squared = span.length_squared();
        if length_squared == 0.0 {
            return (point.distance(self.start), 0.0);
        }
        let t = (point - self.start).dot(span) / length_squared;
        let closest = self.start + span * t.clamp(0.0, 1.0);
        (point.distance(closest), t)
    }
}

/// A derived piece of a path with resolved edges and neighbour links.
///
/// Equality and hashing consider the kind only.
#[derive(Debug, Clone)]
pub struct Segment {
    pub kind: SegmentKind,
    pub edges: SegmentEdges,
    pub previous: Option<usize>,
    pub next: Option<usize>,
}

impl PartialEq for Segment {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
    }
}

impl Eq for Segment {}

impl Hash for Segment {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind.hash(state);
    }
}
