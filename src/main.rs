//! Headless demo driver
//!
//! Runs a session with a tiny autopilot (jump when the nearest obstacle
//! gets close) so the core can be exercised and profiled without a
//! renderer. `dino-dash [seed] [ticks] [--json]`

use dino_dash::consts::{PLAYER_X, SPAWN_X};
use dino_dash::{GameConfig, GamePhase, GameState, TickInput, format_score, tick};

/// 60 Hz frame cadence
const FRAME_MS: f32 = 1000.0 / 60.0;

/// Jump when an obstacle's leading edge is within this range
const REACT_DISTANCE: f32 = 120.0;

fn main() {
    env_logger::init();

    let mut seed: u64 = 0xD1_90;
    let mut ticks: u64 = 3600;
    let mut dump_json = false;

    let mut positional = 0;
    for arg in std::env::args().skip(1) {
        if arg == "--json" {
            dump_json = true;
            continue;
        }
        match positional {
            0 => seed = arg.parse().unwrap_or(seed),
            _ => ticks = arg.parse().unwrap_or(ticks),
        }
        positional += 1;
    }

    let mut state = match GameState::new(GameConfig::default(), seed) {
        Ok(state) => state,
        Err(e) => {
            log::error!("bad configuration: {e}");
            std::process::exit(1);
        }
    };

    for _ in 0..ticks {
        let input = TickInput {
            jump: should_jump(&state),
        };
        let result = tick(&mut state, &input, FRAME_MS);

        if result.phase == GamePhase::GameOver {
            break;
        }
    }

    println!(
        "seed {seed}: {} after {} ticks, score {}",
        match state.phase {
            GamePhase::Running => "still running",
            GamePhase::GameOver => "game over",
        },
        state.time_ticks,
        format_score(state.score)
    );

    if dump_json {
        match serde_json::to_string_pretty(&state) {
            Ok(json) => println!("{json}"),
            Err(e) => log::error!("state dump failed: {e}"),
        }
    }
}

/// Autopilot: hop once the nearest approaching obstacle is in range
fn should_jump(state: &GameState) -> bool {
    if !state.player.on_ground {
        return false;
    }
    state
        .obstacles
        .iter()
        .filter(|o| o.pos.x + o.size.x > PLAYER_X && o.pos.x < SPAWN_X)
        .map(|o| o.pos.x - PLAYER_X)
        .any(|gap| gap > 0.0 && gap < REACT_DISTANCE)
}
