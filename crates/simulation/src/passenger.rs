//! Passengers, their travel plans, and the holder abstraction shared by
//! stations and metros.

use crate::path::PathId;
use crate::station::{ShapeType, StationId};

pub type PassengerId = u32;

// =============================================================================
// TravelPlan
// =============================================================================

/// A collapsed route: the transfer and destination stations still ahead,
/// the index of the next one, and the path to board towards it.
///
/// An empty route means "no destination reachable right now".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TravelPlan {
    route: Vec<StationId>,
    next_index: usize,
    pub next_path: Option<PathId>,
}

impl TravelPlan {
    pub fn new(route: Vec<StationId>) -> Self {
        Self {
            route,
            next_index: 0,
            next_path: None,
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn route(&self) -> &[StationId] {
        &self.route
    }

    pub fn next_station(&self) -> Option<StationId> {
        self.route.get(self.next_index).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.route.is_empty()
    }

    /// Move on to the following hop. The boarding path must be resolved
    /// again by the caller.
    pub fn advance(&mut self) {
        self.next_index += 1;
        self.next_path = None;
    }
}

// =============================================================================
// Passenger
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Passenger {
    pub id: PassengerId,
    pub destination: ShapeType,
    pub travel_plan: Option<TravelPlan>,
    /// Station of the most recent dock while aboard, or the spawn station.
    pub last_station: Option<StationId>,
}

impl Passenger {
    pub fn new(id: PassengerId, destination: ShapeType) -> Self {
        Self {
            id,
            destination,
            travel_plan: None,
            last_station: None,
        }
    }

    pub fn next_station(&self) -> Option<StationId> {
        self.travel_plan.as_ref().and_then(TravelPlan::next_station)
    }

    pub fn next_path(&self) -> Option<PathId> {
        self.travel_plan.as_ref().and_then(|plan| plan.next_path)
    }
}

// =============================================================================
// Holder
// =============================================================================

/// Anything that carries a bounded list of passengers.
pub trait PassengerHolder {
    fn passengers(&self) -> &[Passenger];
    fn capacity(&self) -> usize;

    fn occupation(&self) -> usize {
        self.passengers().len()
    }

    fn has_room(&self) -> bool {
        self.occupation() < self.capacity()
    }
}
