//! Color slots for paths.
//!
//! There is one slot per allowed path. A slot's index fixes both the line
//! color (hues evenly spaced around the wheel) and the path order used to
//! offset parallel lines, so orders are centred on zero.

use bevy::color::Color;

use crate::location::PathOrder;
use crate::path::PathId;

#[derive(Debug, Clone, Copy)]
pub struct ColorSlot {
    pub color: Color,
    pub order: PathOrder,
    pub taken_by: Option<PathId>,
}

#[derive(Debug, Clone)]
pub struct PathColorManager {
    slots: Vec<ColorSlot>,
}

impl PathColorManager {
    pub fn new(max_paths: usize) -> Self {
        let half = (max_paths / 2) as PathOrder;
        let slots = (0..max_paths)
            .map(|i| ColorSlot {
                color: Color::hsv(360.0 * i as f32 / (max_paths + 1) as f32, 1.0, 1.0),
                order: i as PathOrder - half,
                taken_by: None,
            })
            .collect();
        Self { slots }
    }

    pub fn slots(&self) -> &[ColorSlot] {
        &self.slots
    }

    pub fn available(&self) -> usize {
        self.slots.iter().filter(|s| s.taken_by.is_none()).count()
    }

    /// Reserve the first free slot for `path`, returning its color and order.
    pub fn assign(&mut self, path: PathId) -> Option<(Color, PathOrder)> {
        let slot = self.slots.iter_mut().find(|s| s.taken_by.is_none())?;
        slot.taken_by = Some(path);
        Some((slot.color, slot.order))
    }

    pub fn release(&mut self, path: PathId) {
        for slot in &mut self.slots {
            if slot.taken_by == Some(path) {
                slot.taken_by = None;
            }
        }
    }
}
