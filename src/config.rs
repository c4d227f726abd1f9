//! Session configuration
//!
//! All gameplay tuning a host may override. Validated once at session
//! creation; a bad value never surfaces mid-run.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Configuration rejected at session creation
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f32 },

    #[error("score_frame_threshold must be at least 1")]
    ZeroThreshold,

    #[error("obstacle_kind_count {count} outside catalog range 1..={max}")]
    KindCountOutOfRange { count: u8, max: u8 },
}

/// Gameplay tuning for one session
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GameConfig {
    /// Horizontal scroll speed applied to ground and obstacles, px per tick
    pub game_speed: f32,
    /// Downward gravity, px/s²
    pub gravity: f32,
    /// Upward launch speed on jump, px/s
    pub jump_impulse: f32,
    /// Time between obstacle spawns, ms
    pub spawn_interval_ms: f32,
    /// Running frames per score award
    pub score_frame_threshold: u32,
    /// Number of obstacle variants to draw from
    pub obstacle_kind_count: u8,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            game_speed: DEFAULT_GAME_SPEED,
            gravity: DEFAULT_GRAVITY,
            jump_impulse: DEFAULT_JUMP_IMPULSE,
            spawn_interval_ms: DEFAULT_SPAWN_INTERVAL_MS,
            score_frame_threshold: DEFAULT_SCORE_FRAME_THRESHOLD,
            obstacle_kind_count: DEFAULT_OBSTACLE_KIND_COUNT,
        }
    }
}

impl GameConfig {
    /// Check every field, against the given catalog size for kinds.
    ///
    /// `catalog_len` is the number of obstacle variants the dimension
    /// catalog actually knows about.
    pub fn validate(&self, catalog_len: u8) -> Result<(), ConfigError> {
        for (field, value) in [
            ("game_speed", self.game_speed),
            ("gravity", self.gravity),
            ("jump_impulse", self.jump_impulse),
            ("spawn_interval_ms", self.spawn_interval_ms),
        ] {
            if !(value > 0.0) {
                return Err(ConfigError::NonPositive { field, value });
            }
        }

        if self.score_frame_threshold == 0 {
            return Err(ConfigError::ZeroThreshold);
        }

        if self.obstacle_kind_count == 0 || self.obstacle_kind_count > catalog_len {
            return Err(ConfigError::KindCountOutOfRange {
                count: self.obstacle_kind_count,
                max: catalog_len,
            });
        }

        Ok(())
    }
}
