#[cfg(test)]
mod tests {
    use bevy::math::Vec2;

    use crate::segments::*;
    use crate::station::{StationId, StationRef};
    use crate::travel_steps::Direction;

    fn stations(n: u32) -> Vec<StationRef> {
        (0..n)
            .map(|i| StationRef {
                id: i as StationId,
                position: Vec2::new(i as f32 * 100.0, (i % 2) as f32 * 80.0),
            })
            .collect()
    }

    fn path_pairs(kinds: &[SegmentKind]) -> Vec<(StationId, StationId)> {
        kinds
            .iter()
            .filter_map(|k| k.station_pair().map(|p| p.ids()))
            .collect()
    }

    #[test]
    fn test_single_station_has_no_segments() {
        assert!(derive_segment_kinds(&stations(1), false).is_empty());
        assert!(derive_segment_kinds(&[], false).is_empty());
    }

    #[test]
    fn test_two_stations_make_one_path_segment() {
        let kinds = derive_segment_kinds(&stations(2), false);
        assert_eq!(kinds.len(), 1);
        assert!(kinds[0].is_path());
    }

    #[test]
    fn test_open_path_alternates_path_and_padding() {
        let kinds = derive_segment_kinds(&stations(4), false);
        // 3 path segments + 2 corners
        assert_eq!(kinds.len(), 5);
        for (i, kind) in kinds.iter().enumerate() {
            assert_eq!(kind.is_path(), i % 2 == 0);
        }
        assert_eq!(path_pairs(&kinds), vec![(0, 1), (1, 2), (2, 3)]);
    }

    #[test]
    fn test_padding_spans_consecutive_pairs() {
        let s = stations(3);
        let kinds = derive_segment_kinds(&s, false);
        assert_eq!(
            kinds[1],
            SegmentKind::Padding(StationTriple {
                previous: s[0],
                current: s[1],
                next: s[2],
            })
        );
    }

    #[test]
    fn test_looped_path_adds_closing_pair_and_corners() {
        let s = stations(3);
        let kinds = derive_segment_kinds(&s, true);
        assert_eq!(kinds.len(), 6);
        assert_eq!(path_pairs(&kinds), vec![(0, 1), (1, 2), (2, 0)]);
        assert_eq!(
            kinds[5],
            SegmentKind::Padding(StationTriple {
                previous: s[2],
                current: s[0],
                next: s[1],
            })
        );
    }

    #[test]
    fn test_kind_queries() {
        let s = stations(3);
        let kinds = derive_segment_kinds(&s, false);
        assert!(kinds[1].contains_station(2));
        assert!(kinds[1].joins(1, 2));
        assert!(!kinds[1].joins(2, 1));
        assert!(!kinds[0].contains_station(2));
        assert_eq!(kinds[0].destination_station(Direction::Forward), Some(1));
        assert_eq!(kinds[0].destination_station(Direction::Backward), Some(0));
        assert_eq!(kinds[1].destination_station(Direction::Forward), None);
    }

    fn bare(kinds: Vec<SegmentKind>) -> Vec<Segment> {
        kinds
            .into_iter()
            .map(|kind| Segment {
                kind,
                edges: SegmentEdges {
                    start: Vec2::ZERO,
                    end: Vec2::ZERO,
                },
                previous: None,
                next: None,
            })
            .collect()
    }

    #[test]
    fn test_links_are_open_unless_looped() {
        let mut open = bare(derive_segment_kinds(&stations(3), false));
        link_segments(&mut open, false);
        assert_eq!(open[0].previous, None);
        assert_eq!(open[0].next, Some(1));
        assert_eq!(open[2].previous, Some(1));
        assert_eq!(open[2].next, None);

        let mut closed = bare(derive_segment_kinds(&stations(3), true));
        link_segments(&mut closed, true);
        assert_eq!(closed[0].previous, Some(5));
        assert_eq!(closed[5].next, Some(0));
    }

    #[test]
    fn test_segment_equality_ignores_edges() {
        let kinds = derive_segment_kinds(&stations(2), false);
        let mut a = bare(kinds.clone());
        let b = bare(kinds);
        a[0].edges.start = Vec2::new(5.0, 5.0);
        assert_eq!(a[0], b[0]);
    }

    #[test]
    fn test_projection_inside_and_outside() {
        let edges = SegmentEdges {
            start: Vec2::new(0.0, 0.0),
            end: Vec2::new(100.0, 0.0),
        };
        let (distance, t) = edges.project(Vec2::new(50.0, 4.0));
        assert!((distance - 4.0).abs() < 1e-4);
        assert!((t - 0.5).abs() < 1e-4);
        let (_, t) = edges.project(Vec2::new(-10.0, 0.0));
        assert!(t < 0.0);
    }
}
