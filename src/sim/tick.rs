//! Per-tick simulation advance
//!
//! One external frame drives one `tick` call. Ordering within a tick is
//! load-bearing: jump resolution → player integration → spawning →
//! advance → cull → collision → score. A jump pressed on a fatal tick still
//! applies before the collision is tested, and a collision freezes score
//! accrual for that same tick.

use rand::Rng;

use super::state::{GamePhase, GameState, Obstacle, Player, SoundIntent, UiIntent};

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Rising edge of the jump control; the input layer owns edge detection
    pub jump: bool,
}

/// Snapshot and intents produced by one tick
#[derive(Debug, Clone)]
pub struct TickResult {
    pub phase: GamePhase,
    pub score: u64,
    pub player: Player,
    pub obstacles: Vec<Obstacle>,
    /// Sounds the host should play, in emission order
    pub sounds: Vec<SoundIntent>,
    /// UI changes the host should apply
    pub ui: Vec<UiIntent>,
}

impl TickResult {
    fn snapshot(state: &GameState, sounds: Vec<SoundIntent>, ui: Vec<UiIntent>) -> Self {
        Self {
            phase: state.phase,
            score: state.score,
            player: state.player,
            obstacles: state.obstacles.clone(),
            sounds,
            ui,
        }
    }
}

/// Advance the session by one frame's worth of time.
///
/// `delta_ms` is the elapsed time since the previous tick. While the
/// session is `GameOver` this only drains queued UI intents; input is
/// consumed and ignored and no state changes.
pub fn tick(state: &mut GameState, input: &TickInput, delta_ms: f32) -> TickResult {
    let mut sounds = Vec::new();
    let mut ui = Vec::new();

    // A restart between ticks owes the host a panel-hide
    if state.hide_panel_queued {
        state.hide_panel_queued = false;
        ui.push(UiIntent::HideGameOver);
    }

    if state.phase == GamePhase::GameOver {
        return TickResult::snapshot(state, sounds, ui);
    }

    state.time_ticks += 1;
    let dt = delta_ms / 1000.0;

    // Jump resolves before anything else so a press on a fatal tick
    // still lands (and still sounds)
    if input.jump && state.player.on_ground {
        state.player.vel_y = -state.config.jump_impulse;
        sounds.push(SoundIntent::Jump);
    }

    integrate_player(state, dt);
    run_spawner(state, delta_ms);
    advance_world(state);
    cull_offscreen(state);

    if let Some(hit_id) = find_collision(state) {
        log::info!(
            "game over: hit obstacle {hit_id} at tick {} score {}",
            state.time_ticks,
            state.score
        );
        state.phase = GamePhase::GameOver;
        state.spawn_timer_ms = 0.0;
        sounds.push(SoundIntent::Hit);
        ui.push(UiIntent::ShowGameOver);
        // Score accrual is frozen from this very tick
        return TickResult::snapshot(state, sounds, ui);
    }

    accrue_score(state);

    TickResult::snapshot(state, sounds, ui)
}

/// Integrate vertical velocity and position under gravity, clamping to the
/// ground surface
fn integrate_player(state: &mut GameState, dt: f32) {
    let player = &mut state.player;
    player.vel_y += state.config.gravity * dt;
    player.pos.y += player.vel_y * dt;

    let rest_y = crate::consts::GROUND_Y - crate::consts::PLAYER_HEIGHT;
    if player.pos.y >= rest_y {
        player.pos.y = rest_y;
        if player.vel_y > 0.0 {
            player.vel_y = 0.0;
        }
        player.on_ground = true;
    } else {
        player.on_ground = false;
        // World-top clamp; only reachable with an oversized jump impulse
        if player.pos.y < 0.0 {
            player.pos.y = 0.0;
            if player.vel_y < 0.0 {
                player.vel_y = 0.0;
            }
        }
    }
}

/// Accumulate the spawn timer and spawn one obstacle per elapsed interval.
///
/// The subtraction (not a reset) carries overshoot forward, so a delta
/// spike larger than one interval catches up with multiple spawns.
fn run_spawner(state: &mut GameState, delta_ms: f32) {
    state.spawn_timer_ms += delta_ms;
    let kind_count = state.config.obstacle_kind_count;
    while state.spawn_timer_ms >= state.config.spawn_interval_ms {
        let kind = state.rng_mut().random_range(1..=kind_count);
        state.spawn_obstacle(kind);
        state.spawn_timer_ms -= state.config.spawn_interval_ms;
    }
}

/// Scroll obstacles and ground left at the shared game speed
fn advance_world(state: &mut GameState) {
    let speed = state.config.game_speed;
    for obstacle in &mut state.obstacles {
        obstacle.pos.x -= speed;
    }
    state.ground_offset += speed;
}

/// Drop obstacles that have fully left the visible world on the left
fn cull_offscreen(state: &mut GameState) {
    state.obstacles.retain(|o| o.bounds().right() >= 0.0);
}

/// First obstacle overlapping the player, if any. Any overlap is terminal,
/// so test order cannot change the outcome.
fn find_collision(state: &GameState) -> Option<u32> {
    let player_box = state.player.bounds();
    state
        .obstacles
        .iter()
        .find(|o| player_box.overlaps(&o.bounds()))
        .map(|o| o.id)
}

/// Count the frame and award points each time the counter crosses the
/// threshold, carrying the remainder
fn accrue_score(state: &mut GameState) {
    state.frame_counter += 1;
    while state.frame_counter > state.config.score_frame_threshold {
        state.score += crate::consts::SCORE_INCREMENT;
        state.frame_counter -= state.config.score_frame_threshold;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::consts::*;
    use glam::Vec2;

    /// One 60 Hz frame, the cadence the original ran at
    const FRAME_MS: f32 = 16.67;

    fn session(seed: u64) -> GameState {
        GameState::new(GameConfig::default(), seed).unwrap()
    }

    fn run_ticks(state: &mut GameState, n: usize, delta_ms: f32) {
        let input = TickInput::default();
        for _ in 0..n {
            tick(state, &input, delta_ms);
        }
    }

    /// Park an obstacle directly on top of the player so the next tick
    /// must detect the overlap
    fn plant_overlapping_obstacle(state: &mut GameState) {
        let id = 9000;
        state.obstacles.push(Obstacle {
            id,
            kind: 1,
            // Wide enough that one tick of advance keeps it overlapping
            pos: Vec2::new(PLAYER_X - 10.0, GROUND_Y - 70.0),
            size: Vec2::new(60.0, 70.0),
        });
    }

    #[test]
    fn test_five_interval_ticks_spawn_five_obstacles() {
        let mut state = session(42);
        run_ticks(&mut state, 5, 1000.0);

        assert_eq!(state.obstacles.len(), 5);
        for o in &state.obstacles {
            assert!((1..=6).contains(&o.kind));
            assert_eq!(o.size, state.catalog.dims(o.kind));
        }
        // Overshoot never accumulates when deltas land on the interval
        assert_eq!(state.spawn_timer_ms, 0.0);
    }

    #[test]
    fn test_delta_spike_spawns_catch_up() {
        let mut state = session(42);
        tick(&mut state, &TickInput::default(), 2500.0);

        assert_eq!(state.obstacles.len(), 2);
        assert!((state.spawn_timer_ms - 500.0).abs() < 1e-3);
    }

    #[test]
    fn test_spawn_timer_carries_overshoot() {
        let mut state = session(42);
        tick(&mut state, &TickInput::default(), 999.0);
        assert!(state.obstacles.is_empty());
        tick(&mut state, &TickInput::default(), 2.0);
        assert_eq!(state.obstacles.len(), 1);
        assert!((state.spawn_timer_ms - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_score_after_101_frames() {
        let mut state = session(42);
        run_ticks(&mut state, 101, FRAME_MS);

        assert_eq!(state.score, 100);
        assert_eq!(state.frame_counter, 1);
    }

    #[test]
    fn test_score_monotonic_while_running() {
        let mut state = session(42);
        // 140 frames: the first spawn (tick 60) is still well right of the
        // player, so the run cannot end underneath the assertion
        let mut last = 0;
        for _ in 0..140 {
            tick(&mut state, &TickInput::default(), FRAME_MS);
            assert_eq!(state.phase, GamePhase::Running);
            assert!(state.score >= last);
            last = state.score;
        }
    }

    #[test]
    fn test_jump_only_from_ground() {
        let mut state = session(42);
        let jump = TickInput { jump: true };

        let result = tick(&mut state, &jump, FRAME_MS);
        assert!(result.sounds.contains(&SoundIntent::Jump));
        assert!(!state.player.on_ground);
        assert!(state.player.vel_y < 0.0);

        // Airborne press is a no-op: gravity is the only force applied
        let vel_before = state.player.vel_y;
        let result = tick(&mut state, &jump, FRAME_MS);
        assert!(result.sounds.is_empty());
        let expected = vel_before + state.config.gravity * (FRAME_MS / 1000.0);
        assert!((state.player.vel_y - expected).abs() < 1e-3);
    }

    #[test]
    fn test_jump_arc_returns_to_ground() {
        let mut state = session(42);
        tick(&mut state, &TickInput { jump: true }, FRAME_MS);

        // 1600 px/s against 5000 px/s² is back down in well under 2 s
        let mut landed = false;
        for _ in 0..120 {
            tick(&mut state, &TickInput::default(), FRAME_MS);
            if state.player.on_ground {
                landed = true;
                break;
            }
            assert!(state.player.pos.y < GROUND_Y - PLAYER_HEIGHT);
        }
        assert!(landed);
        assert_eq!(state.player.pos.y, GROUND_Y - PLAYER_HEIGHT);
        assert_eq!(state.player.vel_y, 0.0);
    }

    #[test]
    fn test_collision_transitions_to_game_over_once() {
        let mut state = session(42);
        plant_overlapping_obstacle(&mut state);

        let result = tick(&mut state, &TickInput::default(), FRAME_MS);
        assert_eq!(result.phase, GamePhase::GameOver);
        assert_eq!(result.sounds, vec![SoundIntent::Hit]);
        assert_eq!(result.ui, vec![UiIntent::ShowGameOver]);
        assert_eq!(state.spawn_timer_ms, 0.0);
        // Frozen from the fatal tick: no frame counted, no score
        assert_eq!(state.frame_counter, 0);
        assert_eq!(state.score, 0);

        // Later ticks re-emit nothing
        let result = tick(&mut state, &TickInput::default(), FRAME_MS);
        assert!(result.sounds.is_empty());
        assert!(result.ui.is_empty());
    }

    #[test]
    fn test_game_over_freezes_world() {
        let mut state = session(42);
        run_ticks(&mut state, 10, FRAME_MS);
        plant_overlapping_obstacle(&mut state);
        tick(&mut state, &TickInput::default(), FRAME_MS);
        assert_eq!(state.phase, GamePhase::GameOver);

        let frozen = state.clone();
        for _ in 0..50 {
            tick(&mut state, &TickInput { jump: true }, 1000.0);
        }
        assert_eq!(state.player, frozen.player);
        assert_eq!(state.obstacles, frozen.obstacles);
        assert_eq!(state.score, frozen.score);
        assert_eq!(state.ground_offset, frozen.ground_offset);
        assert_eq!(state.time_ticks, frozen.time_ticks);
    }

    #[test]
    fn test_jump_applies_on_fatal_tick() {
        // Same-tick ordering: the jump lands (and sounds) before the
        // collision ends the run
        let mut state = session(42);
        plant_overlapping_obstacle(&mut state);

        let result = tick(&mut state, &TickInput { jump: true }, FRAME_MS);
        assert_eq!(result.phase, GamePhase::GameOver);
        assert_eq!(result.sounds, vec![SoundIntent::Jump, SoundIntent::Hit]);
        assert!(state.player.vel_y < 0.0);
    }

    #[test]
    fn test_cull_removes_offscreen_for_good() {
        let mut state = session(42);
        state.obstacles.push(Obstacle {
            id: 1,
            kind: 1,
            pos: Vec2::new(3.0, GROUND_Y - 70.0),
            size: Vec2::new(34.0, 70.0),
        });

        // 8 ticks * 5 px = 40 px of travel; right edge crosses zero
        for _ in 0..8 {
            tick(&mut state, &TickInput::default(), FRAME_MS);
        }
        assert!(state.obstacles.iter().all(|o| o.id != 1));

        run_ticks(&mut state, 20, FRAME_MS);
        assert!(state.obstacles.iter().all(|o| o.id != 1));
    }

    #[test]
    fn test_no_cull_while_any_part_visible() {
        let mut state = session(42);
        state.obstacles.push(Obstacle {
            id: 1,
            kind: 1,
            pos: Vec2::new(-20.0, GROUND_Y - 70.0),
            size: Vec2::new(34.0, 70.0),
        });

        // After one tick the right edge is at 9, still on screen
        tick(&mut state, &TickInput::default(), FRAME_MS);
        assert_eq!(state.obstacles.len(), 1);
    }

    #[test]
    fn test_ground_and_obstacles_share_speed() {
        let mut state = session(42);
        state.spawn_obstacle(2);
        let x0 = state.obstacles[0].pos.x;
        let g0 = state.ground_offset;

        run_ticks(&mut state, 7, FRAME_MS);
        let obstacle_travel = x0 - state.obstacles[0].pos.x;
        let ground_travel = state.ground_offset - g0;
        assert_eq!(obstacle_travel, ground_travel);
    }

    #[test]
    fn test_restart_recovers_and_hides_panel() {
        let mut state = session(42);
        run_ticks(&mut state, 150, FRAME_MS);
        plant_overlapping_obstacle(&mut state);
        tick(&mut state, &TickInput::default(), FRAME_MS);
        assert_eq!(state.phase, GamePhase::GameOver);

        state.restart();
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.score, 0);
        assert_eq!(state.frame_counter, 0);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.player, Player::new());

        // The panel-hide rides out on the next tick
        let result = tick(&mut state, &TickInput::default(), FRAME_MS);
        assert_eq!(result.ui, vec![UiIntent::HideGameOver]);
        let result = tick(&mut state, &TickInput::default(), FRAME_MS);
        assert!(result.ui.is_empty());
    }

    #[test]
    fn test_determinism_across_equal_seeds() {
        let mut a = session(99999);
        let mut b = session(99999);

        for i in 0..600 {
            let input = TickInput { jump: i % 37 == 0 };
            tick(&mut a, &input, FRAME_MS);
            tick(&mut b, &input, FRAME_MS);
        }

        assert_eq!(a.obstacles, b.obstacles);
        assert_eq!(a.score, b.score);
        assert_eq!(a.player, b.player);
        assert_eq!(a.phase, b.phase);
    }

    #[test]
    fn test_result_snapshot_matches_state() {
        let mut state = session(42);
        let result = tick(&mut state, &TickInput::default(), 1000.0);
        assert_eq!(result.phase, state.phase);
        assert_eq!(result.score, state.score);
        assert_eq!(result.player, state.player);
        assert_eq!(result.obstacles, state.obstacles);
    }
}
