//! Game state and core simulation types
//!
//! Everything a tick reads or writes lives in `GameState`, including the
//! seeded RNG, so two states built from the same seed replay identically.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::layout::{GhostSpawn, LevelLayout};
use super::maze::Maze;
use super::motion::Direction;
use crate::config::{ConfigError, SimConfig};
use crate::consts::*;

/// Session status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameStatus {
    /// Waiting for a start command
    #[default]
    Idle,
    /// Active gameplay
    Playing,
    /// Game is paused
    Paused,
    /// Level cleared, waiting for `advance_level`
    Won,
    /// Out of lives
    GameOver,
}

/// Something that happened during a tick, for audio/commentary/HUD observers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    PelletEaten { points: u64 },
    PowerPelletEaten { points: u64, duration: u32 },
    GhostEaten { ghost_id: u32, points: u64 },
    /// Frightened mode ran out this tick
    PowerExpired,
    LifeLost { lives_remaining: u8 },
    GameOver { score: u64, level: u32 },
    LevelWon { score: u64, level: u32 },
}

/// Position, heading and speed shared by the agent and the ghosts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Top-left corner of the entity's one-tile box
    pub pos: Vec2,
    pub dir: Direction,
    /// Heading requested for the next opportunity to turn
    pub next_dir: Direction,
    /// Units per tick
    pub speed: f32,
}

impl Entity {
    pub fn new(pos: Vec2, dir: Direction, speed: f32) -> Self {
        Self {
            pos,
            dir,
            next_dir: Direction::None,
            speed,
        }
    }

    /// Center of the entity's box
    pub fn center(&self) -> Vec2 {
        super::motion::center(self.pos)
    }
}

/// A ghost
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ghost {
    pub entity: Entity,
    pub id: u32,
    /// 0xRRGGBB, for renderers only
    pub color: u32,
    /// Vulnerable to the agent
    pub frightened: bool,
    /// Caught while frightened; intangible until the power timer clears
    pub eaten: bool,
}

impl Ghost {
    pub fn spawn(spawn: &GhostSpawn, speed: f32) -> Self {
        Self {
            entity: Entity::new(spawn.tile * TILE_SIZE, Direction::Up, speed),
            id: spawn.id,
            color: spawn.color,
            frightened: false,
            eaten: false,
        }
    }

    /// Can this ghost catch the agent?
    pub fn is_hostile(&self) -> bool {
        !self.frightened && !self.eaten
    }

    /// Can the agent eat this ghost?
    pub fn is_edible(&self) -> bool {
        self.frightened && !self.eaten
    }
}

/// Read-only copy of the session counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub score: u64,
    pub lives: u8,
    pub level: u32,
    pub status: GameStatus,
    pub power_timer: u32,
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Drives ghost swerves and redirects
    pub(crate) rng: Pcg32,
    pub config: SimConfig,
    /// Canonical level template; never mutated
    pub(crate) layout: LevelLayout,
    /// Working copy of the template for the current level
    pub(crate) maze: Maze,
    pub score: u64,
    pub lives: u8,
    /// Current level (1-based)
    pub level: u32,
    pub status: GameStatus,
    /// Ticks of frightened mode left; zero when inactive
    pub power_timer: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub agent: Entity,
    /// Sorted by id for deterministic iteration
    pub ghosts: Vec<Ghost>,
}

impl GameState {
    /// Create an idle game on the classic board with default tuning
    pub fn new(seed: u64) -> Self {
        Self::build(seed, LevelLayout::classic(), SimConfig::default())
    }

    /// Create an idle game on a custom board, rejecting tunings the ghost
    /// policy cannot run with
    pub fn with_layout(
        seed: u64,
        layout: LevelLayout,
        config: SimConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(seed, layout, config))
    }

    fn build(seed: u64, layout: LevelLayout, config: SimConfig) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            maze: layout.maze.clone(),
            agent: Entity::new(layout.agent_spawn_pos(), Direction::None, config.agent_speed),
            ghosts: Vec::new(),
            layout,
            score: 0,
            lives: config.initial_lives,
            level: 1,
            status: GameStatus::Idle,
            power_timer: 0,
            time_ticks: 0,
            config,
        };
        state.reset_entities();
        state
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn layout(&self) -> &LevelLayout {
        &self.layout
    }

    pub fn agent(&self) -> &Entity {
        &self.agent
    }

    pub fn ghosts(&self) -> &[Ghost] {
        &self.ghosts
    }

    pub fn session(&self) -> SessionSnapshot {
        SessionSnapshot {
            score: self.score,
            lives: self.lives,
            level: self.level,
            status: self.status,
            power_timer: self.power_timer,
        }
    }

    /// Begin a fresh session from any status
    pub fn start_session(&mut self) {
        self.score = 0;
        self.lives = self.config.initial_lives;
        self.level = 1;
        self.power_timer = 0;
        self.maze = self.layout.maze.clone();
        self.reset_entities();
        self.status = GameStatus::Playing;
        log::info!(
            "Session started: seed={} lives={} pellets={}",
            self.seed,
            self.lives,
            self.maze.remaining_pellet_count()
        );
    }

    /// Queue a heading for the agent; applied on the next tick it fits
    pub fn set_intended_direction(&mut self, dir: Direction) {
        if self.status != GameStatus::Playing || dir == Direction::None {
            log::trace!("Ignoring direction {:?} while {:?}", dir, self.status);
            return;
        }
        self.agent.next_dir = dir;
    }

    /// Move on from a cleared level
    pub fn advance_level(&mut self) {
        if self.status != GameStatus::Won {
            log::trace!("Ignoring level advance while {:?}", self.status);
            return;
        }
        self.level += 1;
        self.power_timer = 0;
        self.maze = self.layout.maze.clone();
        self.reset_entities();
        self.status = GameStatus::Playing;
        log::info!(
            "Level {} begins (ghost speed {:.2}, power {} ticks)",
            self.level,
            self.config.ghost_speed(self.level),
            self.config.power_duration(self.level)
        );
    }

    /// Playing <-> Paused
    pub fn toggle_pause(&mut self) {
        self.status = match self.status {
            GameStatus::Playing => GameStatus::Paused,
            GameStatus::Paused => GameStatus::Playing,
            other => other,
        };
    }

    /// Put the agent and every ghost back on their spawns
    pub fn reset_entities(&mut self) {
        self.agent = Entity::new(
            self.layout.agent_spawn_pos(),
            Direction::None,
            self.config.agent_speed,
        );
        let speed = self.config.ghost_speed(self.level);
        self.ghosts = self
            .layout
            .ghost_spawns
            .iter()
            .map(|spawn| Ghost::spawn(spawn, speed))
            .collect();
        // Spawns come in reading order; iteration order is by id
        self.ghosts.sort_by_key(|g| g.id);
    }
}
