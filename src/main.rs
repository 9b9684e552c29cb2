//! Maze Chase headless runner
//!
//! Plays a seeded session with a random autopilot and logs the event stream.
//! Useful for soak-testing tuning files without a renderer.
//!
//! Usage: `maze-chase [seed] [tuning.json]`

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use maze_chase::SimConfig;
use maze_chase::commentary::{RoundSummary, fallback_commentary};
use maze_chase::consts::TICKS_PER_SECOND;
use maze_chase::cues::cues_for;
use maze_chase::sim::{Direction, GameEvent, GameState, GameStatus, LevelLayout, TickInput, tick};

/// Ten minutes of play
const MAX_TICKS: u64 = 10 * 60 * TICKS_PER_SECOND as u64;
/// Autopilot picks a new heading this often
const STEER_INTERVAL: u64 = 20;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Maze Chase (headless) starting...");

    let mut args = std::env::args().skip(1);
    let seed = args
        .next()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(0x5EED);
    let config = match args.next() {
        Some(path) => SimConfig::load_or_default(path),
        None => SimConfig::default(),
    };

    let mut state = match GameState::with_layout(seed, LevelLayout::classic(), config) {
        Ok(state) => state,
        Err(e) => {
            log::error!("Cannot start: {}", e);
            std::process::exit(1);
        }
    };
    let mut pilot = Pcg32::seed_from_u64(seed ^ 0xA5A5_A5A5);
    log::info!("Game initialized with seed: {}", seed);

    let mut input = TickInput {
        start: true,
        ..Default::default()
    };

    for t in 0..MAX_TICKS {
        if t % STEER_INTERVAL == 0 {
            input.direction = Some(Direction::CARDINAL[pilot.random_range(0..4)]);
        }

        let events = tick(&mut state, &input);

        // Clear one-shot inputs after processing
        input = TickInput::default();

        for event in &events {
            log::debug!("t={} {:?}", state.time_ticks, event);
            if let Some(summary) = RoundSummary::from_event(event) {
                log::info!("{}", fallback_commentary(summary.outcome));
            }
            if matches!(event, GameEvent::LevelWon { .. }) {
                input.advance_level = true;
            }
        }
        let cues = cues_for(&events);
        if !cues.is_empty() {
            log::trace!("cues: {:?}", cues);
        }

        if state.status == GameStatus::GameOver {
            break;
        }
    }

    let session = state.session();
    log::info!(
        "Finished after {} ticks: score={} level={} lives={} status={:?}",
        state.time_ticks,
        session.score,
        session.level,
        session.lives,
        session.status
    );
    match serde_json::to_string_pretty(&session) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to serialize session: {}", e),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Library-only on the web; frontends call `sim::tick` directly
}
