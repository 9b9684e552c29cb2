//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically. Order within a
//! tick: agent moves, pellets are eaten, ghosts move, collisions resolve, and
//! finally the board is checked for a clear.

use super::ghost::step_ghost;
use super::motion::{Direction, advance, is_blocked};
use super::pellets::update_pellets;
use super::state::{GameEvent, GameState, GameStatus};
use crate::consts::*;

/// Commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Start (or restart) a session
    pub start: bool,
    /// Desired agent heading (arrow keys / swipe)
    pub direction: Option<Direction>,
    /// Pause toggle
    pub pause: bool,
    /// Continue to the next level after a clear
    pub advance_level: bool,
}

/// Advance the game state by one fixed timestep, returning what happened
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if input.start {
        state.start_session();
    }
    if input.advance_level {
        state.advance_level();
    }
    if input.pause {
        state.toggle_pause();
    }
    if let Some(dir) = input.direction {
        state.set_intended_direction(dir);
    }

    // Nothing moves unless we're playing
    if state.status != GameStatus::Playing {
        return events;
    }

    state.time_ticks += 1;

    move_agent(state);
    update_pellets(state, &mut events);
    move_ghosts(state);
    resolve_collisions(state, &mut events);

    if state.status == GameStatus::Playing && state.maze.remaining_pellet_count() == 0 {
        state.status = GameStatus::Won;
        log::info!("Level {} cleared with score {}", state.level, state.score);
        events.push(GameEvent::LevelWon {
            score: state.score,
            level: state.level,
        });
    }

    events
}

/// Turn toward the queued heading if it's open, then step if the heading is open
fn move_agent(state: &mut GameState) {
    let maze = &state.maze;
    let agent = &mut state.agent;

    if agent.next_dir != Direction::None && !is_blocked(maze, agent.pos, agent.next_dir) {
        agent.dir = agent.next_dir;
    }

    if !is_blocked(maze, agent.pos, agent.dir) {
        agent.pos = advance(agent.pos, agent.dir, agent.speed, maze.pixel_width());
    }
}

/// Eaten ghosts stay where they were caught until frightened mode ends
fn move_ghosts(state: &mut GameState) {
    let GameState {
        ghosts,
        maze,
        rng,
        config,
        ..
    } = state;

    for ghost in ghosts.iter_mut().filter(|g| !g.eaten) {
        step_ghost(ghost, maze, config.ghost_redirect_chance, rng);
    }
}

fn resolve_collisions(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let reach = TILE_SIZE * COLLISION_FACTOR;
    let agent_center = state.agent.center();

    for idx in 0..state.ghosts.len() {
        let ghost = &mut state.ghosts[idx];
        if ghost.eaten || ghost.entity.center().distance(agent_center) >= reach {
            continue;
        }

        if ghost.is_edible() {
            ghost.eaten = true;
            state.score += GHOST_POINTS;
            log::debug!("Ghost {} eaten", ghost.id);
            events.push(GameEvent::GhostEaten {
                ghost_id: ghost.id,
                points: GHOST_POINTS,
            });
            continue;
        }

        // Caught by a hostile ghost; the rest of the ghosts don't matter now
        lose_life(state, events);
        return;
    }
}

fn lose_life(state: &mut GameState, events: &mut Vec<GameEvent>) {
    if state.lives > 1 {
        state.lives -= 1;
        state.power_timer = 0;
        state.reset_entities();
        log::debug!("Life lost, {} remaining", state.lives);
        events.push(GameEvent::LifeLost {
            lives_remaining: state.lives,
        });
    } else {
        state.lives = 0;
        state.status = GameStatus::GameOver;
        log::info!("Game over: score={} level={}", state.score, state.level);
        events.push(GameEvent::LifeLost { lives_remaining: 0 });
        events.push(GameEvent::GameOver {
            score: state.score,
            level: state.level,
        });
    }
}
