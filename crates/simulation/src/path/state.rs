use bevy::color::Color;
use bevy::math::Vec2;

use super::movement::advance_metro;
use super::PathId;
use crate::location::{LocationService, PathOrder};
use crate::metro::Metro;
use crate::segments::{derive_segment_kinds, link_segments, Segment, SegmentKind, StationPair};
use crate::station::{StationId, StationRef};
use crate::travel_steps::{Direction, StepId, TravelRing};

#[derive(Debug, Clone)]
pub struct Path {
    pub id: PathId,
    pub color: Color,
    pub order: PathOrder,
    /// Still being drawn: not routable and without metros.
    pub is_being_created: bool,
    pub selected: bool,
    /// Preview point the open end is being dragged towards.
    pub temporary_point: Option<Vec2>,
    /// The preview hangs off the first station instead of the last.
    pub preview_from_start: bool,
    stations: Vec<StationRef>,
    looped: bool,
    segments: Vec<Segment>,
    ring: TravelRing,
    locations: LocationService,
    metros: Vec<Metro>,
}

impl Path {
    pub fn new(id: PathId, color: Color, order: PathOrder, order_shift: f32) -> Self {
        Self {
            id,
            color,
            order,
            is_being_created: false,
            selected: false,
            temporary_point: None,
            preview_from_start: false,
            stations: Vec::new(),
            looped: false,
            segments: Vec::new(),
            ring: TravelRing::default(),
            locations: LocationService::new(order_shift),
            metros: Vec::new(),
        }
    }

    // -------------------------------------------------------------------------
    // Stations
    // -------------------------------------------------------------------------

    pub fn stations(&self) -> &[StationRef] {
        &self.stations
    }

    pub fn station_ids(&self) -> impl Iterator<Item = StationId> + '_ {
        self.stations.iter().map(|s| s.id)
    }

    pub fn contains(&self, id: StationId) -> bool {
        self.stations.iter().any(|s| s.id == id)
    }

    pub fn position_of(&self, id: StationId) -> Option<usize> {
        self.stations.iter().position(|s| s.id == id)
    }

    pub fn last_station(&self) -> Option<StationRef> {
        self.stations.last().copied()
    }

    pub fn is_first(&self, id: StationId) -> bool {
        self.stations.first().is_some_and(|s| s.id == id)
    }

    pub fn is_last(&self, id: StationId) -> bool {
        self.stations.last().is_some_and(|s| s.id == id)
    }

    pub fn is_looped(&self) -> bool {
        self.looped
    }

    pub fn add_station(&mut self, station: StationRef) {
        debug_assert!(!self.contains(station.id));
        self.stations.push(station);
        self.rebuild();
    }

    pub fn insert_station(&mut self, index: usize, station: StationRef) {
        debug_assert!(!self.contains(station.id));
        self.stations.insert(index.min(self.stations.len()), station);
        self.rebuild();
    }

    pub fn remove_station(&mut self, id: StationId) -> bool {
        let Some(index) = self.position_of(id) else {
            return false;
        };
        self.stations.remove(index);
        if self.looped && self.stations.len() < 3 {
            self.looped = false;
        }
        self.rebuild();
        true
    }

    pub fn set_loop(&mut self) {
        debug_assert!(self.stations.len() > 2, "a loop needs at least three stations");
        self.looped = true;
        self.rebuild();
    }

    // -------------------------------------------------------------------------
    // Segments
    // -------------------------------------------------------------------------

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn path_segments(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter().filter(|s| s.kind.is_path())
    }

    pub fn ring(&self) -> &TravelRing {
        &self.ring
    }

    /// The path segment whose drawn line passes within `width` of
    /// `position`, strictly between its two ends.
    pub fn path_segment_at(&self, position: Vec2, width: f32) -> Option<StationPair> {
        self.path_segments().find_map(|segment| {
            let (distance, t) = segment.edges.project(position);
            (distance < width && t > 0.0 && t < 1.0)
                .then(|| segment.kind.station_pair())
                .flatten()
        })
    }

    /// Index of `pair` among the path segments only.
    pub fn path_segment_index(&self, pair: (StationId, StationId)) -> Option<usize> {
        self.path_segments()
            .position(|s| s.kind.station_pair().is_some_and(|p| p.ids() == pair))
    }

    /// Segment kinds a metro currently travels on.
    pub fn occupied_segments(&self) -> impl Iterator<Item = &SegmentKind> + '_ {
        self.metros.iter().filter_map(|metro| {
            let step = self.ring.step(metro.step)?;
            self.segments.get(step.segment_index).map(|s| &s.kind)
        })
    }

    // -------------------------------------------------------------------------
    // Metros
    // -------------------------------------------------------------------------

    pub fn metros(&self) -> &[Metro] {
        &self.metros
    }

    pub fn metros_mut(&mut self) -> &mut [Metro] {
        &mut self.metros
    }

    /// Put `metro` at the head of the ring, docked at the first station.
    pub fn add_metro(&mut self, mut metro: Metro) {
        let Some(head) = self.ring.head() else {
            return;
        };
        metro.path_id = self.id;
        metro.step = head;
        if let Some(segment) = self.segments.first() {
            metro.position = segment.edges.start;
            let docked = match segment.kind {
                SegmentKind::Path(pair) => pair.start.id,
                SegmentKind::Padding(triple) => triple.previous.id,
            };
            metro.set_docked(Some(docked));
        }
        self.metros.push(metro);
    }

    /// Advance every metro by `dt_ms` simulated milliseconds.
    pub fn move_metros(&mut self, dt_ms: f32) {
        for metro in &mut self.metros {
            advance_metro(metro, &self.segments, &self.ring, dt_ms);
        }
    }

    /// Detach every metro from the path.
    pub fn take_metros(&mut self) -> Vec<Metro> {
        std::mem::take(&mut self.metros)
    }

    /// Travel heading of `metro` in degrees, measured from the +x axis.
    pub fn metro_heading(&self, metro: &Metro) -> Option<f32> {
        let step = self.ring.step(metro.step)?;
        let segment = self.segments.get(step.segment_index)?;
        let delta = segment.edges.endpoint(step.direction) - metro.position;
        if delta == Vec2::ZERO {
            return None;
        }
        Some(delta.y.atan2(delta.x).to_degrees())
    }

    /// Line from the open end to the temporary point while drawing.
    pub fn preview_line(&self) -> Option<(Vec2, Vec2)> {
        let point = self.temporary_point?;
        let end = if self.preview_from_start {
            self.stations.first()?
        } else {
            self.stations.last()?
        };
        Some((end.position, point))
    }

    // -------------------------------------------------------------------------
    // Rebuild
    // -------------------------------------------------------------------------

    fn rebuild(&mut self) {
        let kinds = derive_segment_kinds(&self.stations, self.looped);
        let order = self.order;
        let mut segments: Vec<Segment> = kinds
            .into_iter()
            .map(|kind| Segment {
                edges: self.locations.locate(&kind, order),
                kind,
                previous: None,
                next: None,
            })
            .collect();
        link_segments(&mut segments, self.looped);
        let ring = TravelRing::build(segments.len(), self.looped);

        for metro in &mut self.metros {
            metro.step = repoint(&self.segments, &self.ring, &segments, &ring, metro.step);
        }
        self.segments = segments;
        self.ring = ring;
    }
}

/// Map a step of the old ring onto the new one by segment value. Falls back
/// to the forward step of the same segment, then to the ring head.
fn repoint(
    old_segments: &[Segment],
    old_ring: &TravelRing,
    segments: &[Segment],
    ring: &TravelRing,
    step: StepId,
) -> StepId {
    let carried = old_ring.step(step).and_then(|old| {
        let kind = old_segments.get(old.segment_index)?.kind;
        let index = segments.iter().position(|s| s.kind == kind)?;
        ring.find(index, old.direction)
            .or_else(|| ring.find(index, Direction::Forward))
    });
    carried.or_else(|| ring.head()).unwrap_or(0)
}
