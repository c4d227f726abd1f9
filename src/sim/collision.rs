//! Axis-aligned bounding-box collision
//!
//! The runner's geometry is all rectangles: one hit ends the run, so the
//! only question per tick is whether the player's box overlaps any live
//! obstacle's box.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Box from top-left corner and size
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    /// Strict overlap test; boxes that merely touch do not collide
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }

    /// Right edge x, the cull criterion for off-screen obstacles
    pub fn right(&self) -> f32 {
        self.max.x
    }
}
