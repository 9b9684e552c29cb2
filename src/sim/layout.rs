//! Level templates
//!
//! A `LevelLayout` is the canonical, never-mutated description of a level:
//! the tile grid plus where the agent and each ghost start. Layouts are
//! written as ASCII art:
//!
//! | glyph | meaning                               |
//! |-------|---------------------------------------|
//! | `#`   | wall                                  |
//! | `.`   | pellet                                |
//! | `o`   | power pellet                          |
//! | `=`   | ghost house                           |
//! | ` `   | empty floor                           |
//! | `P`   | agent spawn (empty floor)             |
//! | `M`   | ghost spawn (empty floor, reading order) |

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::maze::{Maze, Tile};
use crate::consts::{GRID_HEIGHT, GRID_WIDTH, TILE_SIZE};

/// Layout parsing failures
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("layout has no rows")]
    Empty,

    #[error("row {row} is {found} tiles wide, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown glyph {glyph:?} at row {row}, column {col}")]
    UnknownGlyph { glyph: char, row: usize, col: usize },

    #[error("layout has no agent spawn ('P')")]
    MissingAgentSpawn,

    #[error("layout has more than one agent spawn ('P')")]
    DuplicateAgentSpawn,

    #[error("maze is {width}x{height} but holds {found} tiles")]
    TileCount {
        width: usize,
        height: usize,
        found: usize,
    },
}

/// Where a ghost starts, in tile units (fractions allowed)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GhostSpawn {
    pub id: u32,
    /// Display color as 0xRRGGBB; ignored by the simulation
    pub color: u32,
    pub tile: Vec2,
}

/// Canonical template for a level
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelLayout {
    pub maze: Maze,
    /// Agent start, in tile units
    pub agent_spawn: Vec2,
    pub ghost_spawns: Vec<GhostSpawn>,
}

/// Default ghost colors, cycled by spawn order
pub const GHOST_COLORS: [u32; 4] = [0xFF0000, 0xFFB8FF, 0x00FFFF, 0xFFB852];

const CLASSIC: [&str; GRID_HEIGHT] = [
    "############################",
    "#............##............#",
    "#.####.#####.##.#####.####.#",
    "#o####.#####.##.#####.####o#",
    "#.####.#####.##.#####.####.#",
    "#..........................#",
    "#.####.##.########.##.####.#",
    "#.####.##.########.##.####.#",
    "#......##....##....##......#",
    "######.##### ## #####.######",
    "######.##### ## #####.######",
    "######.##          ##.######",
    "######.## ###==### ##.######",
    "######.## #======# ##.######",
    "      .   #======#   .      ",
    "######.## #======# ##.######",
    "######.## ######## ##.######",
    "######.##          ##.######",
    "######.## ######## ##.######",
    "######.## ######## ##.######",
    "#............##............#",
    "#.####.#####.##.#####.####.#",
    "#.####.#####.##.#####.####.#",
    "#o..##.......  .......##..o#",
    "###.##.##.########.##.##.###",
    "###.##.##.########.##.##.###",
    "#......##....##....##......#",
    "#.##########.##.##########.#",
    "#.##########.##.##########.#",
    "#..........................#",
    "############################",
];

impl LevelLayout {
    /// Parse an ASCII layout (see module docs for glyphs)
    pub fn parse(text: &str) -> Result<Self, LayoutError> {
        let lines: Vec<&str> = text.lines().filter(|l| !l.is_empty()).collect();
        let expected = lines.first().ok_or(LayoutError::Empty)?.chars().count();

        let mut rows = Vec::with_capacity(lines.len());
        let mut agent_spawn = None;
        let mut ghost_spawns = Vec::new();

        for (row, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != expected {
                return Err(LayoutError::RaggedRow {
                    row,
                    expected,
                    found,
                });
            }

            let mut tiles = Vec::with_capacity(found);
            for (col, glyph) in line.chars().enumerate() {
                let tile = match glyph {
                    '#' => Tile::Wall,
                    '.' => Tile::Pellet,
                    'o' => Tile::PowerPellet,
                    '=' => Tile::GhostHouse,
                    ' ' => Tile::Empty,
                    'P' => {
                        if agent_spawn.is_some() {
                            return Err(LayoutError::DuplicateAgentSpawn);
                        }
                        agent_spawn = Some(Vec2::new(col as f32, row as f32));
                        Tile::Empty
                    }
                    'M' => {
                        let id = ghost_spawns.len() as u32;
                        ghost_spawns.push(GhostSpawn {
                            id,
                            color: GHOST_COLORS[id as usize % GHOST_COLORS.len()],
                            tile: Vec2::new(col as f32, row as f32),
                        });
                        Tile::Empty
                    }
                    _ => return Err(LayoutError::UnknownGlyph { glyph, row, col }),
                };
                tiles.push(tile);
            }
            rows.push(tiles);
        }

        Ok(Self {
            maze: Maze::from_rows(rows),
            agent_spawn: agent_spawn.ok_or(LayoutError::MissingAgentSpawn)?,
            ghost_spawns,
        })
    }

    /// The 28x31 arcade board with a tunnel on row 14.
    ///
    /// Spawns sit on half tiles, between the two columns of the central
    /// corridors, so they are set directly rather than through glyphs.
    pub fn classic() -> Self {
        debug_assert!(CLASSIC.iter().all(|line| line.len() == GRID_WIDTH));
        let rows = CLASSIC
            .iter()
            .map(|line| {
                line.chars()
                    .map(|glyph| match glyph {
                        '#' => Tile::Wall,
                        '.' => Tile::Pellet,
                        'o' => Tile::PowerPellet,
                        '=' => Tile::GhostHouse,
                        _ => Tile::Empty,
                    })
                    .collect()
            })
            .collect();

        let ghost_tiles = [
            Vec2::new(13.5, 11.0),
            Vec2::new(13.5, 14.0),
            Vec2::new(11.5, 14.0),
            Vec2::new(15.5, 14.0),
        ];

        Self {
            maze: Maze::from_rows(rows),
            agent_spawn: Vec2::new(13.5, 23.0),
            ghost_spawns: ghost_tiles
                .iter()
                .zip(GHOST_COLORS)
                .enumerate()
                .map(|(id, (&tile, color))| GhostSpawn {
                    id: id as u32,
                    color,
                    tile,
                })
                .collect(),
        }
    }

    /// Agent spawn in simulation units
    pub fn agent_spawn_pos(&self) -> Vec2 {
        self.agent_spawn * TILE_SIZE
    }
}

impl Default for LevelLayout {
    fn default() -> Self {
        Self::classic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_dimensions() {
        let layout = LevelLayout::classic();
        assert_eq!(layout.maze.width(), GRID_WIDTH);
        assert_eq!(layout.maze.height(), GRID_HEIGHT);
        assert_eq!(layout.ghost_spawns.len(), 4);
        // 240 pellets + 4 power pellets, as on the arcade board
        assert_eq!(layout.maze.remaining_pellet_count(), 244);
    }

    #[test]
    fn test_classic_tunnel_row_is_open_at_both_ends() {
        let maze = LevelLayout::classic().maze;
        assert_eq!(maze.tile_at(14, 0), Tile::Empty);
        assert_eq!(maze.tile_at(14, (GRID_WIDTH - 1) as isize), Tile::Empty);
    }

    #[test]
    fn test_classic_spawns_are_walkable() {
        let layout = LevelLayout::classic();
        let center = Vec2::splat(TILE_SIZE / 2.0);
        let (row, col) = Maze::tile_coords(layout.agent_spawn_pos() + center);
        assert_ne!(layout.maze.tile_at(row, col), Tile::Wall);
        for spawn in &layout.ghost_spawns {
            let (row, col) = Maze::tile_coords(spawn.tile * TILE_SIZE + center);
            assert_ne!(layout.maze.tile_at(row, col), Tile::Wall, "ghost {}", spawn.id);
        }
    }

    #[test]
    fn test_parse_markers() {
        let layout = LevelLayout::parse("#####\n#P.M#\n#o=M#\n#####\n").unwrap();
        assert_eq!(layout.agent_spawn, Vec2::new(1.0, 1.0));
        assert_eq!(layout.ghost_spawns.len(), 2);
        assert_eq!(layout.ghost_spawns[1].id, 1);
        assert_eq!(layout.ghost_spawns[1].tile, Vec2::new(3.0, 2.0));
        assert_eq!(layout.maze.tile_at(1, 1), Tile::Empty);
        assert_eq!(layout.maze.tile_at(2, 2), Tile::GhostHouse);
        assert_eq!(layout.maze.remaining_pellet_count(), 2);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(LevelLayout::parse("").unwrap_err(), LayoutError::Empty);
        assert_eq!(
            LevelLayout::parse("###\n#P\n").unwrap_err(),
            LayoutError::RaggedRow {
                row: 1,
                expected: 3,
                found: 2
            }
        );
        assert_eq!(
            LevelLayout::parse("#P#\n#x#\n").unwrap_err(),
            LayoutError::UnknownGlyph {
                glyph: 'x',
                row: 1,
                col: 1
            }
        );
        assert_eq!(
            LevelLayout::parse("#.#\n").unwrap_err(),
            LayoutError::MissingAgentSpawn
        );
        assert_eq!(
            LevelLayout::parse("PP\n").unwrap_err(),
            LayoutError::DuplicateAgentSpawn
        );
    }
}
