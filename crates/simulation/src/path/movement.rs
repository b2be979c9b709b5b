use crate::metro::Metro;
use crate::segments::Segment;
use crate::travel_steps::TravelRing;

/// Move `metro` towards the end of its current step.
///
/// When this tick's travel covers the remaining distance the metro snaps
/// onto the endpoint, docks (at a station for path segments, nowhere for
/// corners) and advances to the next step. Otherwise it moves partway and
/// is undocked.
pub(super) fn advance_metro(metro: &mut Metro, segments: &[Segment], ring: &TravelRing, dt_ms: f32) {
    let Some(step) = ring.step(metro.step).copied() else {
        return;
    };
    let Some(segment) = segments.get(step.segment_index) else {
        return;
    };

    let destination = segment.edges.endpoint(step.direction);
    let remaining = metro.position.distance(destination);
    let travel = metro.speed_per_ms * dt_ms;

    if travel >= remaining {
        metro.position = destination;
        metro.set_docked(segment.kind.destination_station(step.direction));
        metro.step = step.next;
    } else {
        let heading = (destination - metro.position).normalize_or_zero();
        metro.position += heading * travel;
        metro.set_docked(None);
    }
}
