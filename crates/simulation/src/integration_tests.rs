//! Integration tests for the transit engine using the `TestNetwork` harness.
//!
//! These tests spin up a headless Bevy App with `SimulationPlugin` and verify
//! behavior that only emerges once the scheduled systems run together.


use bevy::math::Vec2;

use crate::config::{MAX_METROS, MAX_PATHS, NUM_STATIONS};
use crate::network_params::NetworkParams;
use crate::station::{ShapeType, StationId};
use crate::test_harness::TestNetwork;

/// Stations on one horizontal line, 300 px apart.
pub(crate) fn line_layout(shapes: &[ShapeType]) -> Vec<(ShapeType, Vec2)> {
    shapes
        .iter()
        .enumerate()
        .map(|(i, &shape)| (shape, Vec2::new(100.0 + 300.0 * i as f32, 300.0)))
        .collect()
}

/// A quiet network with the given station line and no passenger waves.
pub(crate) fn quiet_line(shapes: &[ShapeType]) -> TestNetwork {
    TestNetwork::new()
        .with_stations(&line_layout(shapes))
        .with_spawning_disabled()
}

// ===========================================================================
// 1. Harness bootstrap
// ===========================================================================

#[test]
fn fresh_network_has_generated_stations_and_no_paths() {
    let net = TestNetwork::new();
    assert_eq!(net.network().stations().len(), NUM_STATIONS);
    assert!(net.network().components.paths.is_empty());
    assert_eq!(net.network().paths_left(), MAX_PATHS);
    assert_eq!(net.game_time(), 0);
}

#[test]
fn ticking_advances_counter_and_clock() {
    let mut net = TestNetwork::new();
    net.tick(10);
    assert_eq!(net.tick_counter(), 10);
    assert_eq!(net.game_time(), 10);
    assert_eq!(net.observation().tick, 10);
}

#[test]
fn paused_network_keeps_counting_ticks_but_not_time() {
    let mut net = TestNetwork::new().paused();
    net.tick(5);
    assert_eq!(net.tick_counter(), 5);
    assert_eq!(net.game_time(), 0);
    assert!(net.observation().paused);
}

// ===========================================================================
// 2. Passenger delivery
// ===========================================================================

#[test]
fn passenger_rides_a_single_path_to_its_shape() {
    let mut net = quiet_line(&[ShapeType::Rect, ShapeType::Circle])
        .with_path(&[0, 1])
        .with_passenger(0, ShapeType::Circle);

    assert!(net.run_until(1_000, |n| n.score() > 0));
    net.assert_score_at_least(1);
    assert_eq!(net.passenger_count(), 0);
}

#[test]
fn passenger_transfers_between_two_paths() {
    let mut net = quiet_line(&[ShapeType::Rect, ShapeType::Triangle, ShapeType::Circle])
        .with_path(&[0, 1])
        .with_path(&[1, 2])
        .with_passenger(0, ShapeType::Circle);

    assert!(net.run_until(3_000, |n| n.score() > 0));
    assert_eq!(net.score(), 1);
    assert_eq!(net.passenger_count(), 0);
}

#[test]
fn passenger_waits_while_no_path_reaches_its_shape() {
    let mut net = quiet_line(&[ShapeType::Rect, ShapeType::Triangle, ShapeType::Circle])
        .with_path(&[0, 1])
        .with_passenger(0, ShapeType::Circle);

    net.tick(500);
    assert_eq!(net.score(), 0);
    net.assert_waiting_at(0, 1);
    let waiting = &net.network().components.stations[0].passengers[0];
    assert!(waiting.next_path().is_none());
}

#[test]
fn looped_path_carries_riders_around_the_ring() {
    let mut net = TestNetwork::new()
        .with_stations(&[
            (ShapeType::Rect, Vec2::new(100.0, 100.0)),
            (ShapeType::Triangle, Vec2::new(400.0, 100.0)),
            (ShapeType::Circle, Vec2::new(250.0, 400.0)),
        ])
        .with_spawning_disabled()
        .with_loop(&[0, 1, 2])
        .with_passenger(0, ShapeType::Circle)
        .with_passenger(2, ShapeType::Rect);

    assert!(net.run_until(3_000, |n| n.score() >= 2));
    assert_eq!(net.passenger_count(), 0);
}

// ===========================================================================
// 3. Spawning and failure
// ===========================================================================

#[test]
fn first_wave_fills_every_station() {
    let params = NetworkParams::default();
    let delay_ticks = (params.first_spawn_delay_ms() / params.tick_ms).ceil() as u32;
    let mut net = TestNetwork::new().with_stations(&line_layout(&[
        ShapeType::Rect,
        ShapeType::Circle,
        ShapeType::Triangle,
    ]));

    net.tick(delay_ticks - 1);
    assert_eq!(net.passenger_count(), 0);
    net.tick(1);
    for station in 0..3 as StationId {
        net.assert_waiting_at(station, 1);
    }
}

#[test]
fn unserved_network_fails_under_fast_spawning() {
    let params = NetworkParams {
        spawn_interval_ms: 16.0,
        ..Default::default()
    };
    let mut net = TestNetwork::with_params(params, 3)
        .with_stations(&line_layout(&[ShapeType::Rect, ShapeType::Circle]));

    net.tick(5);
    net.assert_not_failed();
    net.tick(40);
    let observation = net.observation();
    assert!(observation.failed);
    assert_eq!(observation.max_queue, 12);
    assert!(observation.stations.iter().all(|s| s.waiting == s.capacity));
}

// ===========================================================================
// 4. Observation and determinism
// ===========================================================================

#[test]
fn observation_reflects_paths_and_fleet() {
    let mut net = quiet_line(&[ShapeType::Rect, ShapeType::Circle, ShapeType::Cross])
        .with_path(&[0, 1, 2]);
    net.tick(1);

    let observation = net.observation();
    assert_eq!(observation.num_paths, 1);
    assert_eq!(observation.paths_left, MAX_PATHS - 1);
    assert_eq!(observation.metros_left, MAX_METROS - 1);
    assert_eq!(observation.paths[0].stations, vec![0, 1, 2]);
    assert_eq!(observation.paths[0].metros.len(), 1);
    assert_eq!(observation.stations.len(), 3);
    assert!(!observation.editing);
}

#[test]
fn same_seed_runs_are_identical() {
    let run = |seed: u64| {
        let mut net = TestNetwork::with_seed(seed).with_path(&[0, 1, 2]);
        net.tick(1_500);
        net.observation().clone()
    };

    let a = run(11);
    let b = run(11);
    assert!(a.score > 0 || a.total_waiting > 0, "no passengers were ever spawned");
    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap()
    );

    let c = run(12);
    assert_ne!(a.stations, c.stations);
}
