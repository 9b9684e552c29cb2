//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (by ghost ID)
//! - No rendering, audio or platform dependencies

pub mod ghost;
pub mod layout;
pub mod maze;
pub mod motion;
pub mod pellets;
pub mod state;
pub mod tick;

pub use layout::{GhostSpawn, LayoutError, LevelLayout};
pub use maze::{Maze, Tile};
pub use motion::{Direction, advance, is_blocked};
pub use state::{Entity, GameEvent, GameState, GameStatus, Ghost, SessionSnapshot};
pub use tick::{TickInput, tick};
