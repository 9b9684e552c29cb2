//! Maze grid and pellet overlay
//!
//! A `Maze` is a row-major grid of tiles. The level template is never mutated;
//! each level plays on a fresh clone, so consuming pellets only touches the copy.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::layout::LayoutError;
use crate::consts::TILE_SIZE;

/// Kind of a single maze cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Tile {
    #[default]
    Empty,
    Wall,
    Pellet,
    PowerPellet,
    /// Ghost pen interior and door. Walkable.
    GhostHouse,
}

impl Tile {
    /// Pellet or power pellet
    #[inline]
    pub fn is_edible(self) -> bool {
        matches!(self, Tile::Pellet | Tile::PowerPellet)
    }
}

/// A fixed-size tile grid, indexed `[row][col]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "MazeRepr")]
pub struct Maze {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
}

/// Unchecked wire shape of a `Maze`
#[derive(Deserialize)]
struct MazeRepr {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
}

impl TryFrom<MazeRepr> for Maze {
    type Error = LayoutError;

    fn try_from(repr: MazeRepr) -> Result<Self, Self::Error> {
        if repr.width.checked_mul(repr.height) != Some(repr.tiles.len()) {
            return Err(LayoutError::TileCount {
                width: repr.width,
                height: repr.height,
                found: repr.tiles.len(),
            });
        }
        Ok(Self {
            width: repr.width,
            height: repr.height,
            tiles: repr.tiles,
        })
    }
}

impl Maze {
    /// Build a maze from rows of equal length.
    ///
    /// Callers are expected to have validated row lengths; see
    /// `LevelLayout::parse` for the checked path.
    pub(crate) fn from_rows(rows: Vec<Vec<Tile>>) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        let tiles = rows.into_iter().flatten().collect();
        Self {
            width,
            height,
            tiles,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Width of the playfield in simulation units
    pub fn pixel_width(&self) -> f32 {
        self.width as f32 * TILE_SIZE
    }

    fn index(&self, row: isize, col: isize) -> Option<usize> {
        if row < 0 || col < 0 {
            return None;
        }
        let (row, col) = (row as usize, col as usize);
        (row < self.height && col < self.width).then(|| row * self.width + col)
    }

    /// Tile at `(row, col)`. Anything outside the grid reads as `Empty`, so
    /// tunnel exits and wraparound probes never hit a phantom wall.
    pub fn tile_at(&self, row: isize, col: isize) -> Tile {
        self.index(row, col)
            .map_or(Tile::Empty, |idx| self.tiles[idx])
    }

    /// Grid coordinates `(row, col)` of the tile containing `point`
    pub fn tile_coords(point: Vec2) -> (isize, isize) {
        (
            (point.y / TILE_SIZE).floor() as isize,
            (point.x / TILE_SIZE).floor() as isize,
        )
    }

    /// Tile containing a continuous point
    pub fn tile_at_point(&self, point: Vec2) -> Tile {
        let (row, col) = Self::tile_coords(point);
        self.tile_at(row, col)
    }

    /// Eat whatever pellet sits at `(row, col)`.
    ///
    /// Returns the consumed kind, or `Empty` when there was nothing to eat.
    /// Walls and ghost-house tiles are left alone.
    pub fn consume(&mut self, row: isize, col: isize) -> Tile {
        let Some(idx) = self.index(row, col) else {
            return Tile::Empty;
        };
        let tile = self.tiles[idx];
        if tile.is_edible() {
            self.tiles[idx] = Tile::Empty;
            tile
        } else {
            Tile::Empty
        }
    }

    /// Pellets and power pellets still on the board
    pub fn remaining_pellet_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.is_edible()).count()
    }

    /// Iterate rows for rendering
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.tiles.chunks(self.width.max(1))
    }
}
