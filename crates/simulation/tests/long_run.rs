//! Long-running engine scenarios driven through the public API only.
//!
//! These tests tick `TransitNetwork` directly, without a Bevy schedule, and
//! check properties that must hold for any seed:
//! - passenger ids are never duplicated
//! - platforms and metros never exceed their capacity
//! - a served network keeps delivering passengers
//!
//! Run: cargo test -p simulation --test long_run

use std::collections::HashSet;

use simulation::game_actions::{execute_action, ActionResult, GameAction};
use simulation::network::TransitNetwork;
use simulation::network_params::NetworkParams;
use simulation::passenger::PassengerHolder;
use simulation::sim_rng::SimRng;

fn served_network(seed: u64) -> (TransitNetwork, SimRng, NetworkParams) {
    let params = NetworkParams::default();
    let mut rng = SimRng::from_seed_u64(seed);
    let mut network = TransitNetwork::generate(&params, &mut rng.0);
    for stations in [vec![0, 1, 2, 3], vec![3, 4, 5, 6], vec![6, 7, 8, 9]] {
        let result = execute_action(
            &GameAction::CreatePath {
                stations,
                close_loop: false,
            },
            &mut network,
            &mut rng,
            &params,
        );
        assert_eq!(result, ActionResult::Success);
    }
    (network, rng, params)
}

fn assert_capacities_hold(network: &TransitNetwork) {
    for station in network.stations() {
        assert!(station.occupation() <= station.capacity, "station {} over capacity", station.id);
    }
    for metro in network.components.metros() {
        assert!(metro.occupation() <= metro.capacity, "metro {} over capacity", metro.id);
    }
}

fn assert_unique_passengers(network: &TransitNetwork) {
    let mut seen = HashSet::new();
    let waiting = network.stations().iter().flat_map(|s| s.passengers.iter());
    let riding = network.components.metros().flat_map(|m| m.passengers.iter());
    for passenger in waiting.chain(riding) {
        assert!(seen.insert(passenger.id), "passenger {} seen twice", passenger.id);
    }
}

// ---------------------------------------------------------------------------
// 1. Invariants over a long run
// ---------------------------------------------------------------------------

#[test]
fn test_invariants_hold_over_ten_thousand_ticks() {
    for seed in [1, 2, 3] {
        let (mut network, mut rng, params) = served_network(seed);
        for tick in 0..10_000 {
            network.increment_time(params.tick_ms, &mut rng.0);
            if tick % 250 == 0 {
                assert_capacities_hold(&network);
                assert_unique_passengers(&network);
            }
        }
        assert_eq!(network.game_time(), 10_000);
    }
}

// ---------------------------------------------------------------------------
// 2. Delivery
// ---------------------------------------------------------------------------

#[test]
fn test_served_network_delivers_passengers() {
    let (mut network, mut rng, params) = served_network(4);
    for _ in 0..10_000 {
        network.increment_time(params.tick_ms, &mut rng.0);
    }
    assert!(network.score() > 0, "no passenger delivered in 10k ticks");
}

// ---------------------------------------------------------------------------
// 3. Removing every path mid-run
// ---------------------------------------------------------------------------

#[test]
fn test_removing_all_paths_keeps_every_passenger() {
    let (mut network, mut rng, params) = served_network(5);
    for _ in 0..3_000 {
        network.increment_time(params.tick_ms, &mut rng.0);
    }
    let before = network.components.passenger_count();
    let ids: Vec<_> = network.components.paths.iter().map(|p| p.id).collect();
    for id in ids {
        network.remove_path(id).unwrap();
    }
    assert_eq!(network.components.passenger_count(), before);
    assert_eq!(network.components.metro_count(), 0);
    assert_eq!(network.paths_left(), params.lines.max_paths);
    assert_unique_passengers(&network);
}
