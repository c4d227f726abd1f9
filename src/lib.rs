//! Dino Dash - an endless-runner gameplay core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (player physics, obstacle stream, collisions, scoring)
//! - `config`: Session configuration with fail-fast validation
//!
//! Rendering, audio and input devices are external collaborators: the core
//! consumes time deltas and jump edges, and emits sound/UI intents for the
//! host to act on.

pub mod config;
pub mod sim;

pub use config::{ConfigError, GameConfig};
pub use sim::{GamePhase, GameState, SoundIntent, TickInput, TickResult, UiIntent, tick};

/// Game configuration constants
pub mod consts {
    /// Player's fixed horizontal position (the world scrolls, not the player)
    pub const PLAYER_X: f32 = 200.0;
    /// Player bounding box (px)
    pub const PLAYER_WIDTH: f32 = 44.0;
    pub const PLAYER_HEIGHT: f32 = 92.0;

    /// Ground surface y; the y axis grows downward
    pub const GROUND_Y: f32 = 425.0;

    /// Obstacle spawn x, just past the right edge of the play area
    pub const SPAWN_X: f32 = 750.0;

    /// Default horizontal scroll speed, px per tick
    pub const DEFAULT_GAME_SPEED: f32 = 5.0;
    /// Default downward gravity, px/s²
    pub const DEFAULT_GRAVITY: f32 = 5000.0;
    /// Default jump impulse (upward launch speed), px/s
    pub const DEFAULT_JUMP_IMPULSE: f32 = 1600.0;
    /// Default time between obstacle spawns, ms
    pub const DEFAULT_SPAWN_INTERVAL_MS: f32 = 1000.0;
    /// Default frames per score award
    pub const DEFAULT_SCORE_FRAME_THRESHOLD: u32 = 100;
    /// Default number of obstacle variants
    pub const DEFAULT_OBSTACLE_KIND_COUNT: u8 = 6;

    /// Points awarded each time the frame counter crosses the threshold
    pub const SCORE_INCREMENT: u64 = 100;

    /// Digits the HUD pads the score to
    pub const SCORE_DIGITS: usize = 5;
}

/// Format a score for the HUD, zero-padded like the classic counter
#[inline]
pub fn format_score(score: u64) -> String {
    format!("{score:0width$}", width = consts::SCORE_DIGITS)
}
