#[cfg(test)]
mod tests {
    use bevy::math::Vec2;

    use crate::network::NetworkComponents;
    use crate::network_params::LineParams;
    use crate::path::PathId;
    use crate::path_editing::{EditCommand, EditError, SessionFlow};
    use crate::path_manager::PathManager;
    use crate::station::{ShapeType, Station, StationId};

    /// Five stations laid out on a 300 px grid:
    ///
    /// ```text
    /// 0 -- 1 -- 2
    /// |
    /// 3    4
    /// ```
    fn grid() -> NetworkComponents {
        let positions = [
            Vec2::new(100.0, 100.0),
            Vec2::new(400.0, 100.0),
            Vec2::new(700.0, 100.0),
            Vec2::new(100.0, 400.0),
            Vec2::new(400.0, 400.0),
        ];
        let stations = positions
            .iter()
            .enumerate()
            .map(|(i, &p)| Station::new(i as StationId, ShapeType::ALL[i % 4], p, 12))
            .collect();
        NetworkComponents::new(stations, LineParams::default())
    }

    fn create(
        manager: &mut PathManager,
        network: &mut NetworkComponents,
        stations: &[StationId],
    ) -> PathId {
        let id = manager.start_path_on_station(network, stations[0]).unwrap();
        for &s in &stations[1..] {
            manager
                .handle_command(network, EditCommand::Motion(s))
                .unwrap();
        }
        if manager.is_editing() {
            manager
                .handle_command(network, EditCommand::Up(None))
                .unwrap();
        }
        id
    }

    fn station_ids(network: &NetworkComponents, path: PathId) -> Vec<StationId> {
        network.path(path).unwrap().station_ids().collect()
    }

    // -------------------------------------------------------------------------
    // Creating
    // -------------------------------------------------------------------------

    #[test]
    fn test_create_path_appends_stations_in_order() {
        let mut net = grid();
        let mut manager = PathManager::default();
        let path = create(&mut manager, &mut net, &[3, 0, 1, 2]);
        assert_eq!(station_ids(&net, path), vec![3, 0, 1, 2]);
        assert!(!manager.is_editing());
        assert!(!net.path(path).unwrap().is_being_created);
    }

    #[test]
    fn test_create_ignores_repeated_and_middle_stations() {
        let mut net = grid();
        let mut manager = PathManager::default();
        let path = manager.start_path_on_station(&mut net, 0).unwrap();
        for s in [1, 1, 2, 1] {
            let flow = manager
                .handle_command(&mut net, EditCommand::Motion(s))
                .unwrap();
            assert_eq!(flow, SessionFlow::Continue);
        }
        assert_eq!(station_ids(&net, path), vec![0, 1, 2]);
    }

    #[test]
    fn test_touching_first_station_closes_loop() {
        let mut net = grid();
        let mut manager = PathManager::default();
        let path = manager.start_path_on_station(&mut net, 0).unwrap();
        for s in [1, 4, 3] {
            manager
                .handle_command(&mut net, EditCommand::Motion(s))
                .unwrap();
        }
        let flow = manager
            .handle_command(&mut net, EditCommand::Motion(0))
            .unwrap();
        assert_eq!(flow, SessionFlow::Done);
        let path = net.path(path).unwrap();
        assert!(path.is_looped());
        assert_eq!(path.metros().len(), 1);
    }

    #[test]
    fn test_loop_needs_more_than_two_stations() {
        let mut net = grid();
        let mut manager = PathManager::default();
        let path = manager.start_path_on_station(&mut net, 0).unwrap();
        manager
            .handle_command(&mut net, EditCommand::Motion(1))
            .unwrap();
        let flow = manager
            .handle_command(&mut net, EditCommand::Motion(0))
            .unwrap();
        assert_eq!(flow, SessionFlow::Continue);
        assert!(!net.path(path).unwrap().is_looped());
        assert_eq!(station_ids(&net, path), vec![0, 1]);
    }

    #[test]
    fn test_release_on_single_station_discards_path() {
        let mut net = grid();
        let mut manager = PathManager::default();
        manager.start_path_on_station(&mut net, 0).unwrap();
        let flow = manager
            .handle_command(&mut net, EditCommand::Up(Some(0)))
            .unwrap();
        assert_eq!(flow, SessionFlow::Done);
        assert!(net.paths.is_empty());
        assert_eq!(net.colors.available(), net.lines.max_paths);
    }

    #[test]
    fn test_release_off_path_aborts_creation() {
        let mut net = grid();
        let mut manager = PathManager::default();
        manager.start_path_on_station(&mut net, 0).unwrap();
        manager
            .handle_command(&mut net, EditCommand::Motion(1))
            .unwrap();
        manager
            .handle_command(&mut net, EditCommand::Up(Some(4)))
            .unwrap();
        assert!(net.paths.is_empty());
        assert!(!manager.is_editing());
    }

    #[test]
    fn test_second_session_is_rejected() {
        let mut net = grid();
        let mut manager = PathManager::default();
        manager.start_path_on_station(&mut net, 0).unwrap();
        assert_eq!(
            manager.start_path_on_station(&mut net, 2),
            Err(EditError::SessionActive)
        );
        assert_eq!(net.paths.len(), 1);
    }

    #[test]
    fn test_path_limit_is_enforced() {
        let mut net = grid();
        net.lines.max_paths = 1;
        let mut manager = PathManager::default();
        create(&mut manager, &mut net, &[0, 1]);
        assert_eq!(
            manager.start_path_on_station(&mut net, 2),
            Err(EditError::PathLimitReached)
        );
    }

    #[test]
    fn test_unknown_station_is_rejected() {
        let mut net = grid();
        let mut manager = PathManager::default();
        assert_eq!(
            manager.start_path_on_station(&mut net, 99),
            Err(EditError::StationNotFound(99))
        );
        assert!(!manager.is_editing());
    }

    #[test]
    fn test_metros_capped_network_wide() {
        let mut net = grid();
        net.lines.max_metros = 1;
        let mut manager = PathManager::default();
        create(&mut manager, &mut net, &[0, 1]);
        create(&mut manager, &mut net, &[3, 4]);
        assert_eq!(net.metro_count(), 1);
    }

    // -------------------------------------------------------------------------
    // Expanding
    // -------------------------------------------------------------------------

    #[test]
    fn test_expand_from_last_station() {
        let mut net = grid();
        let mut manager = PathManager::default();
        let path = create(&mut manager, &mut net, &[0, 1]);
        manager
            .start_expanding_path_on_station(&mut net, 1, 0)
            .unwrap();
        let flow = manager
            .handle_command(&mut net, EditCommand::Motion(2))
            .unwrap();
        assert_eq!(flow, SessionFlow::Done);
        assert_eq!(station_ids(&net, path), vec![0, 1, 2]);
    }

    #[test]
    fn test_expand_from_first_station_prepends() {
        let mut net = grid();
        let mut manager = PathManager::default();
        let path = create(&mut manager, &mut net, &[0, 1]);
        manager
            .start_expanding_path_on_station(&mut net, 0, 0)
            .unwrap();
        assert!(net.path(path).unwrap().preview_from_start);
        manager
            .handle_command(&mut net, EditCommand::Motion(3))
            .unwrap();
        assert_eq!(station_ids(&net, path), vec![3, 0, 1]);
        assert!(!net.path(path).unwrap().preview_from_start);
    }

    #[test]
    fn test_expand_keeps_metro_on_its_segment() {
        let mut net = grid();
        let mut manager = PathManager::default();
        let path = create(&mut manager, &mut net, &[0, 1]);
        manager
            .start_expanding_path_on_station(&mut net, 0, 0)
            .unwrap();
        manager
            .handle_command(&mut net, EditCommand::Motion(3))
            .unwrap();
        let path = net.path(path).unwrap();
        let metro = &path.metros()[0];
        let step = path.ring().step(metro.step).unwrap();
        assert!(path.segments()[step.segment_index].kind.joins(0, 1));
    }

    #[test]
    fn test_expand_from_middle_station_is_rejected() {
        let mut net = grid();
        let mut manager = PathManager::default();
        create(&mut manager, &mut net, &[0, 1, 2]);
        assert_eq!(
            manager.start_expanding_path_on_station(&mut net, 1, 0),
            Err(EditError::NotATerminus(1))
        );
    }

    #[test]
    fn test_expand_looped_path_is_rejected() {
        let mut net = grid();
        let mut manager = PathManager::default();
        let path = create(&mut manager, &mut net, &[0, 1, 4, 3, 0]);
        assert!(net.path(path).unwrap().is_looped());
        assert_eq!(
            manager.start_expanding_path_on_station(&mut net, 0, 0),
            Err(EditError::PathIsLooped(path))
        );
    }

    #[test]
    fn test_expand_with_missing_path_index() {
        let mut net = grid();
        let mut manager = PathManager::default();
        create(&mut manager, &mut net, &[0, 1]);
        assert_eq!(
            manager.start_expanding_path_on_station(&mut net, 0, 1),
            Err(EditError::NoPathAtStation(0))
        );
    }

    #[test]
    fn test_expand_abort_keeps_path() {
        let mut net = grid();
        let mut manager = PathManager::default();
        let path = create(&mut manager, &mut net, &[0, 1]);
        manager
            .start_expanding_path_on_station(&mut net, 1, 0)
            .unwrap();
        manager
            .handle_command(&mut net, EditCommand::Down)
            .unwrap();
        assert_eq!(station_ids(&net, path), vec![0, 1]);
        assert!(!net.path(path).unwrap().selected);
    }

    // -------------------------------------------------------------------------
    // Intermediate stations
    // -------------------------------------------------------------------------

    #[test]
    fn test_insert_station_into_segment() {
        let mut net = grid();
        let mut manager = PathManager::default();
        let path = create(&mut manager, &mut net, &[0, 1, 2]);
        manager
            .start_editing_segment(&mut net, path, (1, 2))
            .unwrap();
        manager.touch(&mut net, 4).unwrap();
        assert_eq!(station_ids(&net, path), vec![0, 1, 4, 2]);
        assert!(!manager.is_editing());
    }

    #[test]
    fn test_remove_station_from_path() {
        let mut net = grid();
        let mut manager = PathManager::default();
        let path = create(&mut manager, &mut net, &[0, 1, 2, 4]);
        manager
            .start_editing_segment(&mut net, path, (2, 4))
            .unwrap();
        manager.touch(&mut net, 2).unwrap();
        assert_eq!(station_ids(&net, path), vec![0, 1, 4]);
    }

    #[test]
    fn test_removal_refused_on_two_station_path() {
        let mut net = grid();
        let mut manager = PathManager::default();
        let path = create(&mut manager, &mut net, &[0, 1]);
        net.path_mut(path).unwrap().take_metros();
        manager
            .start_editing_segment(&mut net, path, (0, 1))
            .unwrap();
        assert_eq!(manager.touch(&mut net, 1), Err(EditError::TooFewStations));
        assert_eq!(station_ids(&net, path), vec![0, 1]);
        assert!(!manager.is_editing());
    }

    #[test]
    fn test_edit_on_occupied_segment_is_refused() {
        let mut net = grid();
        let mut manager = PathManager::default();
        let path = create(&mut manager, &mut net, &[0, 1, 2]);
        // The new metro sits on the first segment.
        assert_eq!(
            manager.start_editing_segment(&mut net, path, (0, 1)),
            Err(EditError::SegmentOccupied)
        );
        manager
            .start_editing_segment(&mut net, path, (1, 2))
            .unwrap();
        assert_eq!(manager.touch(&mut net, 1), Err(EditError::SegmentOccupied));
        assert_eq!(station_ids(&net, path), vec![0, 1, 2]);
    }

    #[test]
    fn test_segment_picked_by_position() {
        let mut net = grid();
        let mut manager = PathManager::default();
        let path = create(&mut manager, &mut net, &[0, 1, 2]);
        let edges = net
            .path(path)
            .unwrap()
            .path_segments()
            .find(|s| s.kind.joins(1, 2))
            .unwrap()
            .edges;
        let middle = (edges.start + edges.end) / 2.0;
        let picked = manager
            .try_starting_path_edition(&mut net, middle)
            .unwrap();
        assert_eq!(picked, path);
        assert_eq!(
            manager.session().map(|s| s.path_id()),
            Some(path)
        );
        assert!(manager.is_editing_intermediate());
        manager.stop_edition(&mut net).unwrap();
        assert!(
            manager
                .try_starting_path_edition(&mut net, Vec2::new(550.0, 300.0))
                .is_err()
        );
    }

    #[test]
    fn test_touch_without_session() {
        let mut net = grid();
        let mut manager = PathManager::default();
        assert_eq!(manager.touch(&mut net, 0), Err(EditError::NoActiveSession));
        assert_eq!(manager.stop_edition(&mut net), Err(EditError::NoActiveSession));
    }

    // -------------------------------------------------------------------------
    // Removal
    // -------------------------------------------------------------------------

    #[test]
    fn test_removing_path_mid_creation_ends_session() {
        let mut net = grid();
        let mut manager = PathManager::default();
        let path = manager.start_path_on_station(&mut net, 0).unwrap();
        manager.remove_path(&mut net, path).unwrap();
        assert!(!manager.is_editing());
        assert!(net.paths.is_empty());
        assert_eq!(net.colors.available(), net.lines.max_paths);
    }

    #[test]
    fn test_removed_color_is_reused() {
        let mut net = grid();
        let mut manager = PathManager::default();
        let first = create(&mut manager, &mut net, &[0, 1]);
        let color = net.path(first).unwrap().color;
        manager.remove_path(&mut net, first).unwrap();
        let second = create(&mut manager, &mut net, &[3, 4]);
        assert_ne!(first, second);
        assert_eq!(net.path(second).unwrap().color, color);
    }
}
