use super::types::{Segment, SegmentKind, StationPair, StationTriple};
use crate::station::StationRef;

/// Segment kinds for a station sequence, in travel order.
///
/// Path segments cover every consecutive pair (plus the closing pair when
/// looped); a padding segment sits between each two consecutive path
/// segments (plus the closing corner when looped).
pub fn derive_segment_kinds(stations: &[StationRef], looped: bool) -> Vec<SegmentKind> {
    let mut pairs: Vec<StationPair> = stations
        .windows(2)
        .map(|w| StationPair::new(w[0], w[1]))
        .collect();
    if looped && stations.len() > 2 {
        if let (Some(&last), Some(&first)) = (stations.last(), stations.first()) {
            pairs.push(StationPair::new(last, first));
        }
    }

    let closing_corner = looped && pairs.len() > 2;
    let mut kinds = Vec::with_capacity(pairs.len() * 2);
    for (i, pair) in pairs.iter().enumerate() {
        kinds.push(SegmentKind::Path(*pair));
        let next = match pairs.get(i + 1) {
            Some(next) => next,
            None if closing_corner => &pairs[0],
            None => continue,
        };
        kinds.push(SegmentKind::Padding(StationTriple {
            previous: pair.start,
            current: pair.end,
            next: next.end,
        }));
    }

    debug_assert_eq!(
        kinds.len(),
        kinds.iter().collect::<std::collections::HashSet<_>>().len(),
        "duplicate segment derived"
    );
    kinds
}

/// Wire predecessor/successor links; the ends stay open unless looped.
pub fn link_segments(segments: &mut [Segment], looped: bool) {
    let n = segments.len();
    for (i, segment) in segments.iter_mut().enumerate() {
        segment.previous = match i {
            0 if looped && n > 1 => Some(n - 1),
            0 => None,
            _ => Some(i - 1),
        };
        segment.next = if i + 1 < n {
            Some(i + 1)
        } else if looped && n > 1 {
            Some(0)
        } else {
            None
        };
    }
}
