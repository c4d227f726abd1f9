//! Obstacle kind → bounding-box dimensions
//!
//! The render layer owns the actual sprites; the simulation only needs each
//! kind's box. Kinds are 1-based to match the asset naming (`obstacle-1` ..).

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Dimension table for the obstacle variants
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObstacleCatalog {
    dims: Vec<Vec2>,
}

impl Default for ObstacleCatalog {
    /// The stock six cactus variants: three small, three large
    fn default() -> Self {
        Self {
            dims: vec![
                Vec2::new(34.0, 70.0),
                Vec2::new(68.0, 70.0),
                Vec2::new(102.0, 70.0),
                Vec2::new(50.0, 100.0),
                Vec2::new(100.0, 100.0),
                Vec2::new(150.0, 100.0),
            ],
        }
    }
}

impl ObstacleCatalog {
    /// Build a catalog from an explicit dimension table
    pub fn new(dims: Vec<Vec2>) -> Self {
        Self { dims }
    }

    /// Number of known variants
    pub fn len(&self) -> u8 {
        self.dims.len() as u8
    }

    pub fn is_empty(&self) -> bool {
        self.dims.is_empty()
    }

    /// Bounding-box size for a 1-based kind.
    ///
    /// An out-of-range kind is an invariant violation (the spawner draws
    /// from [1, kind_count] and kind_count is validated against this table),
    /// so it panics rather than degrading.
    pub fn dims(&self, kind: u8) -> Vec2 {
        assert!(
            kind >= 1 && kind <= self.len(),
            "obstacle kind {kind} outside catalog range 1..={}",
            self.len()
        );
        self.dims[(kind - 1) as usize]
    }
}
