//! Visual placement of segment edges.
//!
//! Parallel lines sharing a station pair are spread apart by their path
//! order: each line is shifted perpendicular to the station-to-station
//! direction by `order × shift` pixels. The sign of the shift comes from the
//! station ids, so `(A, B)` and `(B, A)` land on the same physical line.

use std::collections::HashMap;

use bevy::math::Vec2;

use crate::segments::{SegmentEdges, SegmentKind, StationPair, StationTriple};
use crate::station::{StationId, StationRef};

pub type PathOrder = i32;

/// Memoizing resolver for segment edge positions.
///
/// Every endpoint is keyed by `(from, to, order)`; once computed it is
/// reused, and a recomputation must agree with the stored value.
#[derive(Debug, Clone, Default)]
pub struct LocationService {
    shift: f32,
    connection_positions: HashMap<(StationId, StationId, PathOrder), Vec2>,
}

impl LocationService {
    pub fn new(shift: f32) -> Self {
        Self {
            shift,
            connection_positions: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.connection_positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.connection_positions.is_empty()
    }

    pub fn locate(&mut self, kind: &SegmentKind, order: PathOrder) -> SegmentEdges {
        match kind {
            SegmentKind::Path(pair) => self.path_segment_edges(pair, order),
            SegmentKind::Padding(triple) => self.padding_segment_edges(triple, order),
        }
    }

    pub fn path_segment_edges(&mut self, pair: &StationPair, order: PathOrder) -> SegmentEdges {
        let offset = self.offset_vector(pair, order);
        let start = self.memoized(pair.start, pair.end, order, pair.start.position + offset);
        let end = self.memoized(pair.end, pair.start, order, pair.end.position + offset);
        SegmentEdges { start, end }
    }

    /// A corner joins the end of the incoming line with the start of the
    /// outgoing one.
    pub fn padding_segment_edges(&mut self, triple: &StationTriple, order: PathOrder) -> SegmentEdges {
        let incoming = self.path_segment_edges(&StationPair::new(triple.previous, triple.current), order);
        let outgoing = self.path_segment_edges(&StationPair::new(triple.current, triple.next), order);
        SegmentEdges {
            start: incoming.end,
            end: outgoing.start,
        }
    }

    fn memoized(&mut self, from: StationRef, to: StationRef, order: PathOrder, computed: Vec2) -> Vec2 {
        let stored = *self
            .connection_positions
            .entry((from.id, to.id, order))
            .or_insert(computed);
        debug_assert_eq!(stored, computed, "edge position drifted for {:?}", (from.id, to.id, order));
        stored
    }

    fn offset_vector(&self, pair: &StationPair, order: PathOrder) -> Vec2 {
        debug_assert_ne!(pair.start.id, pair.end.id);
        let sign = if pair.start.id > pair.end.id { 1.0 } else { -1.0 };
        let direction = (pair.end.position - pair.start.position).normalize_or_zero();
        let buffer = (direction * self.shift).perp();
        (buffer * order as f32 * sign).round()
    }
}
