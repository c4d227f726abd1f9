//! Game state and core simulation types
//!
//! All state a session needs for determinism lives here: two sessions built
//! with the same config and seed, fed the same inputs, stay identical.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::catalog::ObstacleCatalog;
use super::collision::Aabb;
use crate::config::{ConfigError, GameConfig};
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Run ended by a collision; only `restart` leaves this phase
    GameOver,
}

/// Sound the host should play this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoundIntent {
    Jump,
    Hit,
}

/// UI change the host should apply this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UiIntent {
    ShowGameOver,
    HideGameOver,
}

/// The player character
///
/// Horizontal position is fixed; the world scrolls past. Only vertical
/// motion is simulated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner of the bounding box
    pub pos: Vec2,
    /// Vertical velocity, px/s, positive downward
    pub vel_y: f32,
    /// Whether the player is resting on the ground (may jump)
    pub on_ground: bool,
}

impl Player {
    /// Player at the initial pose: resting on the ground
    pub fn new() -> Self {
        Self {
            pos: Vec2::new(PLAYER_X, GROUND_Y - PLAYER_HEIGHT),
            vel_y: 0.0,
            on_ground: true,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT))
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

/// A scrolling obstacle
///
/// Kinds are visually distinct but behaviorally identical: one code path
/// advances, culls and collides all of them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    /// 1-based variant index
    pub kind: u8,
    /// Top-left corner of the bounding box
    pub pos: Vec2,
    pub size: Vec2,
}

impl Obstacle {
    pub fn bounds(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }
}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Session RNG; drawn from only when spawning obstacles
    rng: Pcg32,
    /// Current phase
    pub phase: GamePhase,
    /// The player character
    pub player: Player,
    /// Live obstacles in spawn order
    pub obstacles: Vec<Obstacle>,
    /// Time accumulated toward the next spawn, ms; stays in [0, interval)
    pub spawn_timer_ms: f32,
    /// Score awarded so far
    pub score: u64,
    /// Running frames since the last score award; stays in [0, threshold)
    pub frame_counter: u32,
    /// Ground scroll offset; advances with the obstacles, never rewound
    pub ground_offset: f32,
    /// Running ticks since session start
    pub time_ticks: u64,
    /// Session tuning, validated at creation
    pub config: GameConfig,
    /// Obstacle kind dimension lookup
    pub catalog: ObstacleCatalog,
    /// Next obstacle ID
    next_id: u32,
    /// Set by `restart`, drained into the next tick's UI intents
    pub(crate) hide_panel_queued: bool,
}

impl GameState {
    /// Create a session with the stock obstacle catalog.
    ///
    /// Fails fast on invalid configuration; nothing validates mid-run.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_catalog(config, ObstacleCatalog::default(), seed)
    }

    /// Create a session against a host-supplied dimension catalog
    pub fn with_catalog(
        config: GameConfig,
        catalog: ObstacleCatalog,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        config.validate(catalog.len())?;
        log::info!("session initialized: seed={seed}");

        Ok(Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Running,
            player: Player::new(),
            obstacles: Vec::new(),
            spawn_timer_ms: 0.0,
            score: 0,
            frame_counter: 0,
            ground_offset: 0.0,
            time_ticks: 0,
            config,
            catalog,
            next_id: 1,
            hide_panel_queued: false,
        })
    }

    /// Allocate a new obstacle ID
    pub(crate) fn next_obstacle_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub(crate) fn rng_mut(&mut self) -> &mut Pcg32 {
        &mut self.rng
    }

    /// Spawn an obstacle of the given kind just past the right edge,
    /// bottom-aligned to the ground surface
    pub(crate) fn spawn_obstacle(&mut self, kind: u8) {
        let size = self.catalog.dims(kind);
        let id = self.next_obstacle_id();
        self.obstacles.push(Obstacle {
            id,
            kind,
            pos: Vec2::new(SPAWN_X, GROUND_Y - size.y),
            size,
        });
        log::debug!("spawned obstacle id={id} kind={kind}");
    }

    /// Reset the session to its initial running state.
    ///
    /// No-op while already running: restart is a game-over-screen action,
    /// and an accidental mid-run call must not wipe progress. The ground
    /// scroll offset is deliberately untouched (the ground never rewinds).
    pub fn restart(&mut self) {
        if self.phase == GamePhase::Running {
            return;
        }

        log::info!("restart: final score was {}", self.score);
        self.phase = GamePhase::Running;
        self.player = Player::new();
        self.obstacles.clear();
        self.spawn_timer_ms = 0.0;
        self.score = 0;
        self.frame_counter = 0;
        self.hide_panel_queued = true;
    }
}
