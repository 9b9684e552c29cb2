//! Maze Chase - deterministic core of a maze-chase arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (maze, movement, ghosts, scoring, session flow)
//! - `config`: Data-driven tuning loaded from JSON
//! - `commentary`: Offline fallback messages for round results and tips
//! - `cues`: Event to sound-cue mapping for audio frontends

pub mod commentary;
pub mod config;
pub mod cues;
pub mod sim;

pub use config::{ConfigError, SimConfig};

/// Game configuration constants
pub mod consts {
    /// Edge length of one maze tile, in simulation units (pixels)
    pub const TILE_SIZE: f32 = 20.0;
    /// Probe inset from each side of an entity's box when testing walls.
    /// Lets an entity a couple of pixels off-grid still turn into a corridor.
    pub const WALL_PADDING: f32 = 3.0; // ceil(TILE_SIZE / 8)

    /// Classic layout dimensions (tiles)
    pub const GRID_WIDTH: usize = 28;
    pub const GRID_HEIGHT: usize = 31;

    /// Score awards
    pub const PELLET_POINTS: u64 = 10;
    pub const POWER_PELLET_POINTS: u64 = 50;
    pub const GHOST_POINTS: u64 = 200;

    /// Agent and ghost centers closer than this fraction of a tile collide
    pub const COLLISION_FACTOR: f32 = 0.8;

    /// Frightened ghosts move at this fraction of their normal speed
    pub const FRIGHTENED_SPEED_FACTOR: f32 = 0.5;

    /// Nominal frame rate the tick constants are tuned for
    pub const TICKS_PER_SECOND: u32 = 60;
}
