//! Passenger exchange at docked metros.
//!
//! For every metro stopped at a station, in order:
//! 1. riders whose destination shape matches the station arrive (+1 score);
//! 2. riders whose plan says to get off here alight if the station has room,
//!    and their plan moves on to the next hop;
//! 3. riders whose plan no longer matches this line alight to be re-planned;
//! 4. station passengers whose next path is this metro's path board while
//!    the metro has room.

use crate::metro::Metro;
use crate::network::NetworkComponents;
use crate::passenger::{PassengerHolder, PassengerId};
use crate::routing::LineIndex;
use crate::station::Station;

/// Exchange passengers at every docked metro. Returns the number of
/// arrivals, which are also added to the score.
pub fn move_passengers(network: &mut NetworkComponents) -> u32 {
    let lines = LineIndex::from_paths(&network.paths);
    let NetworkComponents {
        stations,
        paths,
        status,
        ..
    } = network;

    let mut arrivals = 0;
    for path in paths.iter_mut() {
        for metro in path.metros_mut() {
            let Some(station_id) = metro.docked_station() else {
                continue;
            };
            let Some(station) = stations.iter_mut().find(|s| s.id == station_id) else {
                continue;
            };
            arrivals += exchange(metro, station, &lines);
        }
    }
    status.score += arrivals;
    arrivals
}

fn exchange(metro: &mut Metro, station: &mut Station, lines: &LineIndex) -> u32 {
    let mut arrivals = 0;

    let riders: Vec<PassengerId> = metro.passengers.iter().map(|p| p.id).collect();
    for id in riders {
        let Some(rider) = metro.passengers.iter().find(|p| p.id == id) else {
            continue;
        };
        if rider.destination == station.shape {
            metro.take_passenger(id);
            arrivals += 1;
            continue;
        }

        let transfer_here = rider.next_station() == Some(station.id);
        let stale = match rider.next_station() {
            Some(next) => !lines.path_serves_both(metro.path_id, station.id, next),
            None => true,
        };
        if !(transfer_here || stale) || !station.has_room() {
            continue;
        }
        let Some(mut rider) = metro.take_passenger(id) else {
            continue;
        };
        match rider.travel_plan.as_mut() {
            Some(plan) if transfer_here => {
                plan.advance();
                plan.next_path = plan
                    .next_station()
                    .and_then(|next| lines.shared_path(station.id, next));
            }
            _ => rider.travel_plan = None,
        }
        rider.last_station = Some(station.id);
        station.add_passenger(rider);
    }

    let boarding: Vec<PassengerId> = station
        .passengers
        .iter()
        .filter(|p| p.next_path() == Some(metro.path_id))
        .map(|p| p.id)
        .collect();
    for id in boarding {
        if !metro.has_room() {
            break;
        }
        if let Some(passenger) = station.take_passenger(id) {
            metro.add_passenger(passenger);
        }
    }

    arrivals
}
