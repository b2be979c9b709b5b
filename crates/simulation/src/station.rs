//! Stations: fixed points on the map where passengers queue.

use std::hash::{Hash, Hasher};

use bevy::log::warn;
use bevy::math::Vec2;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::network_params::StationParams;
use crate::passenger::{Passenger, PassengerHolder, PassengerId};

pub type StationId = u32;

// =============================================================================
// Shape types
// =============================================================================

/// Identity of a station. Passengers travel to any station with the shape
/// they carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ShapeType {
    Rect,
    Circle,
    Triangle,
    Cross,
}

impl ShapeType {
    pub const ALL: [ShapeType; 4] = [
        ShapeType::Rect,
        ShapeType::Circle,
        ShapeType::Triangle,
        ShapeType::Cross,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ShapeType::Rect => "rect",
            ShapeType::Circle => "circle",
            ShapeType::Triangle => "triangle",
            ShapeType::Cross => "cross",
        }
    }
}

// =============================================================================
// StationRef
// =============================================================================

/// Lightweight handle a path keeps for each of its stations.
///
/// Equality and hashing consider the id only, so a path never depends on
/// the queue state of the station it refers to.
#[derive(Debug, Clone, Copy)]
pub struct StationRef {
    pub id: StationId,
    pub position: Vec2,
}

impl PartialEq for StationRef {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for StationRef {}

impl Hash for StationRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

// =============================================================================
// Station
// =============================================================================

#[derive(Debug, Clone)]
pub struct Station {
    pub id: StationId,
    pub position: Vec2,
    pub shape: ShapeType,
    pub capacity: usize,
    pub passengers: Vec<Passenger>,
}

impl Station {
    pub fn new(id: StationId, shape: ShapeType, position: Vec2, capacity: usize) -> Self {
        Self {
            id,
            position,
            shape,
            capacity,
            passengers: Vec::new(),
        }
    }

    pub fn as_ref(&self) -> StationRef {
        StationRef {
            id: self.id,
            position: self.position,
        }
    }

    pub fn add_passenger(&mut self, passenger: Passenger) {
        self.passengers.push(passenger);
    }

    /// Remove and return the passenger with `id`, if queued here.
    pub fn take_passenger(&mut self, id: PassengerId) -> Option<Passenger> {
        let index = self.passengers.iter().position(|p| p.id == id)?;
        Some(self.passengers.remove(index))
    }
}

impl PassengerHolder for Station {
    fn passengers(&self) -> &[Passenger] {
        &self.passengers
    }

    fn capacity(&self) -> usize {
        self.capacity
    }
}

// =============================================================================
// Generation
// =============================================================================

/// Uniform position inside the padded playable area, rounded to pixels.
fn random_position(params: &StationParams, rng: &mut impl Rng) -> Vec2 {
    let pad = params.padding_ratio;
    let span = 1.0 - pad * 2.0;
    Vec2::new(
        (params.world_width * (pad + rng.gen::<f32>() * span)).round(),
        (params.world_height * (pad + rng.gen::<f32>() * span)).round(),
    )
}

/// Place `params.count` stations with random shapes, keeping every pair at
/// least `params.min_distance` apart.
///
/// Placement is rejection sampling with a bounded number of attempts per
/// station; when the bound is hit the last candidate is kept so generation
/// always terminates.
pub fn generate_stations(params: &StationParams, rng: &mut impl Rng) -> Vec<Station> {
    let mut stations: Vec<Station> = Vec::with_capacity(params.count);
    for index in 0..params.count {
        let mut position = random_position(params, rng);
        let mut placed = false;
        for _ in 0..crate::config::STATION_PLACEMENT_ATTEMPTS {
            if stations
                .iter()
                .all(|s| s.position.distance(position) >= params.min_distance)
            {
                placed = true;
                break;
            }
            position = random_position(params, rng);
        }
        if !placed {
            warn!(
                "station {} placed closer than {:.0}px to a neighbour",
                index, params.min_distance
            );
        }
        let shape = *ShapeType::ALL.choose(rng).unwrap_or(&ShapeType::Rect);
        stations.push(Station::new(index as StationId, shape, position, params.capacity));
    }
    stations
}

// =============================================================================
// Tests
// =============================================================================
