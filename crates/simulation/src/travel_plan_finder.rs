//! Assigns travel plans to passengers waiting at stations.
//!
//! Runs every tick. Passengers whose plan still matches the network keep
//! it; everyone else is planned afresh towards a randomly ordered station of
//! their destination shape.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::network::NetworkComponents;
use crate::passenger::{Passenger, TravelPlan};
use crate::routing::{skip_same_path, LineIndex, StationGraph};
use crate::station::{ShapeType, StationId};

pub fn find_travel_plans(network: &mut NetworkComponents, rng: &mut impl Rng) {
    let graph = StationGraph::build(network.stations.iter().map(|s| s.id), &network.paths);
    let lines = LineIndex::from_paths(&network.paths);
    let shapes: Vec<(StationId, ShapeType)> =
        network.stations.iter().map(|s| (s.id, s.shape)).collect();

    for station in network.stations.iter_mut() {
        if !lines.serves(station.id) {
            for passenger in &mut station.passengers {
                passenger.travel_plan = None;
            }
            continue;
        }
        for passenger in &mut station.passengers {
            if plan_is_current(passenger, station.id, &lines) {
                continue;
            }
            let mut candidates: Vec<StationId> = shapes
                .iter()
                .filter(|(_, shape)| *shape == passenger.destination)
                .map(|(id, _)| *id)
                .collect();
            candidates.shuffle(rng);
            passenger.travel_plan = Some(plan_towards(station.id, &candidates, &graph, &lines));
        }
    }
}

/// A plan is current when its boarding path still exists and still links
/// the passenger's station with the next planned stop.
fn plan_is_current(passenger: &Passenger, station: StationId, lines: &LineIndex) -> bool {
    let Some(plan) = &passenger.travel_plan else {
        return false;
    };
    match (plan.next_path, plan.next_station()) {
        (Some(path), Some(next)) => lines.path_serves_both(path, station, next),
        _ => false,
    }
}

/// Plan along the first reachable candidate; an empty plan when none is.
fn plan_towards(
    start: StationId,
    candidates: &[StationId],
    graph: &StationGraph,
    lines: &LineIndex,
) -> TravelPlan {
    for &candidate in candidates {
        let route = graph.search(start, candidate);
        if route.len() < 2 {
            continue;
        }
        let collapsed = skip_same_path(&route, graph);
        let mut plan = TravelPlan::new(collapsed[1..].to_vec());
        plan.next_path = plan
            .next_station()
            .and_then(|next| lines.shared_path(start, next));
        return plan;
    }
    TravelPlan::empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network_params::LineParams;
    use crate::passenger::Passenger;
    use crate::sim_rng::SimRng;
    use crate::station::Station;
    use bevy::math::Vec2;

    fn network(shapes: &[ShapeType]) -> NetworkComponents {
        let stations = shapes
            .iter()
            .enumerate()
            .map(|(i, &shape)| Station::new(i as StationId, shape, Vec2::new(i as f32 * 200.0, 100.0), 12))
            .collect();
        NetworkComponents::new(stations, LineParams::default())
    }

    fn connect(network: &mut NetworkComponents, stations: &[StationId]) -> u32 {
        let id = network.create_path().unwrap();
        for &s in stations {
            let station = network.station_ref(s).unwrap();
            network.path_mut(id).unwrap().add_station(station);
        }
        id
    }

    #[test]
    fn test_isolated_station_plans_are_cleared() {
        let mut net = network(&[ShapeType::Rect, ShapeType::Circle]);
        let mut passenger = Passenger::new(1, ShapeType::Circle);
        passenger.travel_plan = Some(TravelPlan::new(vec![1]));
        net.stations[0].add_passenger(passenger);
        find_travel_plans(&mut net, &mut SimRng::default().0);
        assert_eq!(net.stations[0].passengers[0].travel_plan, None);
    }

    #[test]
    fn test_plan_collapses_to_destination_on_one_path() {
        let mut net = network(&[ShapeType::Rect, ShapeType::Triangle, ShapeType::Circle]);
        let path = connect(&mut net, &[0, 1, 2]);
        net.stations[0].add_passenger(Passenger::new(1, ShapeType::Circle));
        find_travel_plans(&mut net, &mut SimRng::default().0);

        let plan = net.stations[0].passengers[0].travel_plan.clone().unwrap();
        assert_eq!(plan.route(), &[2]);
        assert_eq!(plan.next_station(), Some(2));
        assert_eq!(plan.next_path, Some(path));
    }

    #[test]
    fn test_plan_keeps_transfer_station() {
        let mut net = network(&[ShapeType::Rect, ShapeType::Triangle, ShapeType::Circle]);
        let first = connect(&mut net, &[0, 1]);
        connect(&mut net, &[1, 2]);
        net.stations[0].add_passenger(Passenger::new(1, ShapeType::Circle));
        find_travel_plans(&mut net, &mut SimRng::default().0);

        let plan = net.stations[0].passengers[0].travel_plan.clone().unwrap();
        assert_eq!(plan.route(), &[1, 2]);
        assert_eq!(plan.next_path, Some(first));
    }

    #[test]
    fn test_unreachable_destination_gets_empty_plan() {
        let mut net = network(&[ShapeType::Rect, ShapeType::Triangle, ShapeType::Circle]);
        connect(&mut net, &[0, 1]);
        net.stations[0].add_passenger(Passenger::new(1, ShapeType::Circle));
        find_travel_plans(&mut net, &mut SimRng::default().0);
        let plan = net.stations[0].passengers[0].travel_plan.clone().unwrap();
        assert!(plan.is_empty());
    }

    #[test]
    fn test_current_plan_is_kept() {
        let mut net = network(&[ShapeType::Rect, ShapeType::Circle, ShapeType::Circle]);
        let path = connect(&mut net, &[0, 1, 2]);
        let mut passenger = Passenger::new(1, ShapeType::Circle);
        let mut plan = TravelPlan::new(vec![2]);
        plan.next_path = Some(path);
        passenger.travel_plan = Some(plan.clone());
        net.stations[0].add_passenger(passenger);
        find_travel_plans(&mut net, &mut SimRng::default().0);
        assert_eq!(net.stations[0].passengers[0].travel_plan, Some(plan));
    }

    #[test]
    fn test_stale_plan_is_replaced() {
        let mut net = network(&[ShapeType::Rect, ShapeType::Triangle, ShapeType::Circle]);
        let path = connect(&mut net, &[0, 1, 2]);
        let mut passenger = Passenger::new(1, ShapeType::Circle);
        let mut plan = TravelPlan::new(vec![2]);
        plan.next_path = Some(path + 40);
        passenger.travel_plan = Some(plan);
        net.stations[0].add_passenger(passenger);
        find_travel_plans(&mut net, &mut SimRng::default().0);
        let plan = net.stations[0].passengers[0].travel_plan.clone().unwrap();
        assert_eq!(plan.next_path, Some(path));
    }

    #[test]
    fn test_paths_being_drawn_do_not_route() {
        let mut net = network(&[ShapeType::Rect, ShapeType::Circle]);
        let path = connect(&mut net, &[0, 1]);
        net.path_mut(path).unwrap().is_being_created = true;
        net.stations[0].add_passenger(Passenger::new(1, ShapeType::Circle));
        find_travel_plans(&mut net, &mut SimRng::default().0);
        assert_eq!(net.stations[0].passengers[0].travel_plan, None);
    }
}
