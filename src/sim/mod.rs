//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Driven only by external time deltas and jump edges
//! - Seeded RNG only
//! - Stable obstacle iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod catalog;
pub mod collision;
pub mod state;
pub mod tick;

pub use catalog::ObstacleCatalog;
pub use collision::Aabb;
pub use state::{GamePhase, GameState, Obstacle, Player, SoundIntent, UiIntent};
pub use tick::{TickInput, TickResult, tick};
