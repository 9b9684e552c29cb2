//! Pellet consumption and the frightened-mode timer

use super::maze::{Maze, Tile};
use super::state::{GameEvent, GameState};
use crate::consts::{PELLET_POINTS, POWER_PELLET_POINTS};

/// Eat whatever is under the agent and run the power timer for one tick.
///
/// Power pellets (re)arm the timer and frighten every ghost that is not
/// already eaten. Any other tick counts a running timer down; the tick it
/// reaches zero, every ghost's frightened and eaten flags are cleared.
pub fn update_pellets(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let was_running = state.power_timer > 0;

    let (row, col) = Maze::tile_coords(state.agent.center());
    match state.maze.consume(row, col) {
        Tile::PowerPellet => {
            let duration = state.config.power_duration(state.level);
            state.score += POWER_PELLET_POINTS;
            state.power_timer = duration;
            for ghost in state.ghosts.iter_mut().filter(|g| !g.eaten) {
                ghost.frightened = true;
            }
            events.push(GameEvent::PowerPelletEaten {
                points: POWER_PELLET_POINTS,
                duration,
            });
            return;
        }
        Tile::Pellet => {
            state.score += PELLET_POINTS;
            events.push(GameEvent::PelletEaten {
                points: PELLET_POINTS,
            });
        }
        _ => {}
    }

    state.power_timer = state.power_timer.saturating_sub(1);
    if was_running && state.power_timer == 0 {
        for ghost in &mut state.ghosts {
            ghost.frightened = false;
            ghost.eaten = false;
        }
        events.push(GameEvent::PowerExpired);
    }
}
