//! Metros: vehicles bound to a single path.

use bevy::math::Vec2;

use crate::passenger::{Passenger, PassengerHolder, PassengerId};
use crate::path::PathId;
use crate::station::StationId;
use crate::travel_steps::StepId;

pub type MetroId = u32;

#[derive(Debug, Clone)]
pub struct Metro {
    pub id: MetroId,
    pub path_id: PathId,
    pub position: Vec2,
    /// Current step in the owning path's travel ring.
    pub step: StepId,
    pub capacity: usize,
    pub speed_per_ms: f32,
    pub passengers: Vec<Passenger>,
    docked: Option<StationId>,
}

impl Metro {
    pub fn new(id: MetroId, path_id: PathId, capacity: usize, speed_per_ms: f32) -> Self {
        Self {
            id,
            path_id,
            position: Vec2::ZERO,
            step: 0,
            capacity,
            speed_per_ms,
            passengers: Vec::new(),
            docked: None,
        }
    }

    /// Station the metro is stopped at, if any.
    pub fn docked_station(&self) -> Option<StationId> {
        self.docked
    }

    /// Dock at (or leave) a station. Docking stamps every rider's
    /// `last_station`.
    pub fn set_docked(&mut self, station: Option<StationId>) {
        self.docked = station;
        if let Some(station) = station {
            for passenger in &mut self.passengers {
                passenger.last_station = Some(station);
            }
        }
    }

    pub fn add_passenger(&mut self, mut passenger: Passenger) {
        if self.docked.is_some() {
            passenger.last_station = self.docked;
        }
        self.passengers.push(passenger);
    }

    pub fn take_passenger(&mut self, id: PassengerId) -> Option<Passenger> {
        let index = self.passengers.iter().position(|p| p.id == id)?;
        Some(self.passengers.remove(index))
    }
}

impl PassengerHolder for Metro {
    fn passengers(&self) -> &[Passenger] {
        &self.passengers
    }

    fn capacity(&self) -> usize {
        self.capacity
    }
}
