//! Wall probes and grid movement
//!
//! Entities occupy a one-tile box whose top-left corner is their position.
//! Legality of a move is decided by probing two points just past the leading
//! edge of that box; the step itself is a separate, unchecked operation so the
//! ghost policy can test several headings without moving anything.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::maze::{Maze, Tile};
use crate::consts::{TILE_SIZE, WALL_PADDING};

/// Heading of an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    /// No intended heading
    #[default]
    None,
}

impl Direction {
    /// The four headings a ghost may pick from, in a fixed order
    pub const CARDINAL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit step in screen space (y grows downward)
    pub fn delta(self) -> Vec2 {
        match self {
            Direction::Up => Vec2::NEG_Y,
            Direction::Down => Vec2::Y,
            Direction::Left => Vec2::NEG_X,
            Direction::Right => Vec2::X,
            Direction::None => Vec2::ZERO,
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::None => Direction::None,
        }
    }
}

/// The two probe points for moving `dir` from `pos`
fn probes(pos: Vec2, dir: Direction) -> Option<[Vec2; 2]> {
    let near = WALL_PADDING;
    let far = TILE_SIZE - WALL_PADDING;
    let points = match dir {
        Direction::Up => [
            Vec2::new(pos.x + near, pos.y - 1.0),
            Vec2::new(pos.x + far, pos.y - 1.0),
        ],
        Direction::Down => [
            Vec2::new(pos.x + near, pos.y + TILE_SIZE),
            Vec2::new(pos.x + far, pos.y + TILE_SIZE),
        ],
        Direction::Left => [
            Vec2::new(pos.x - 1.0, pos.y + near),
            Vec2::new(pos.x - 1.0, pos.y + far),
        ],
        Direction::Right => [
            Vec2::new(pos.x + TILE_SIZE, pos.y + near),
            Vec2::new(pos.x + TILE_SIZE, pos.y + far),
        ],
        Direction::None => return None,
    };
    Some(points)
}

/// Would moving `dir` from `pos` run into a wall?
///
/// `Direction::None` always counts as blocked: there is nothing to move along.
pub fn is_blocked(maze: &Maze, pos: Vec2, dir: Direction) -> bool {
    match probes(pos, dir) {
        Some(points) => points
            .iter()
            .any(|&p| maze.tile_at_point(p) == Tile::Wall),
        None => true,
    }
}

/// Step `speed` units along `dir`, wrapping horizontally through tunnels.
///
/// Does not consult the maze; gate with `is_blocked` first.
pub fn advance(pos: Vec2, dir: Direction, speed: f32, maze_width: f32) -> Vec2 {
    let mut next = pos + dir.delta() * speed;

    let right_edge = maze_width - TILE_SIZE;
    if next.x < 0.0 {
        next.x = right_edge;
    } else if next.x > right_edge {
        next.x = 0.0;
    }

    next
}

/// Center point of an entity box
#[inline]
pub fn center(pos: Vec2) -> Vec2 {
    pos + Vec2::splat(TILE_SIZE / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::GRID_WIDTH;
    use crate::sim::layout::LevelLayout;
    use proptest::prelude::*;

    fn corridor() -> Maze {
        LevelLayout::parse(
            "#####\n\
             #P  #\n\
             ## ##\n\
             #####\n",
        )
        .unwrap()
        .maze
    }

    fn tile(col: f32, row: f32) -> Vec2 {
        Vec2::new(col, row) * TILE_SIZE
    }

    #[test]
    fn test_none_is_always_blocked() {
        let maze = corridor();
        assert!(is_blocked(&maze, tile(1.0, 1.0), Direction::None));
        assert!(is_blocked(&maze, tile(-3.0, 40.0), Direction::None));
    }

    #[test]
    fn test_walls_block_in_each_direction() {
        let maze = corridor();
        let pos = tile(1.0, 1.0);
        assert!(is_blocked(&maze, pos, Direction::Up));
        assert!(is_blocked(&maze, pos, Direction::Down));
        assert!(is_blocked(&maze, pos, Direction::Left));
        assert!(!is_blocked(&maze, pos, Direction::Right));

        // Above the gap in row 2
        assert!(!is_blocked(&maze, tile(2.0, 1.0), Direction::Down));
    }

    #[test]
    fn test_padding_tolerates_small_misalignment() {
        let maze = corridor();
        // Two pixels off the gap column still fits; a half tile does not.
        assert!(!is_blocked(&maze, tile(2.0, 1.0) + Vec2::new(2.0, 0.0), Direction::Down));
        assert!(is_blocked(&maze, tile(2.0, 1.0) + Vec2::new(10.0, 0.0), Direction::Down));
    }

    #[test]
    fn test_advance_moves_linearly() {
        let width = 5.0 * TILE_SIZE;
        let pos = tile(1.0, 1.0);
        assert_eq!(advance(pos, Direction::Right, 2.0, width), pos + Vec2::new(2.0, 0.0));
        assert_eq!(advance(pos, Direction::Up, 1.5, width), pos - Vec2::new(0.0, 1.5));
        assert_eq!(advance(pos, Direction::None, 2.0, width), pos);
    }

    #[test]
    fn test_advance_wraps_through_tunnel() {
        let width = GRID_WIDTH as f32 * TILE_SIZE;
        let right_edge = width - TILE_SIZE;
        let row = 14.0 * TILE_SIZE;

        let left = advance(Vec2::new(1.0, row), Direction::Left, 2.0, width);
        assert_eq!(left, Vec2::new(right_edge, row));

        let right = advance(Vec2::new(right_edge, row), Direction::Right, 2.0, width);
        assert_eq!(right, Vec2::new(0.0, row));
    }

    #[test]
    fn test_tunnel_exits_are_open() {
        let maze = LevelLayout::classic().maze;
        let width = maze.pixel_width();
        let row = 14.0 * TILE_SIZE;

        // Leaving through the left edge
        let pos = Vec2::new(0.0, row);
        assert!(!is_blocked(&maze, pos, Direction::Left));
        let wrapped = advance(pos, Direction::Left, 2.0, width);
        assert_eq!(maze.tile_at_point(center(wrapped)), Tile::Empty);
        assert!(!is_blocked(&maze, wrapped, Direction::Left));

        // And through the right edge
        let pos = Vec2::new(width - TILE_SIZE, row);
        assert!(!is_blocked(&maze, pos, Direction::Right));
        let wrapped = advance(pos, Direction::Right, 2.0, width);
        assert_eq!(wrapped.x, 0.0);
        assert!(!is_blocked(&maze, wrapped, Direction::Right));
    }

    #[test]
    fn test_opposite() {
        for dir in Direction::CARDINAL {
            assert_eq!(dir.opposite().opposite(), dir);
            assert_eq!(dir.delta() + dir.opposite().delta(), Vec2::ZERO);
        }
    }

    proptest! {
        #[test]
        fn advance_never_wraps_vertically_and_stays_in_row_bounds(
            x in 0.0f32..=540.0,
            y in -100.0f32..800.0,
            speed in 0.0f32..=TILE_SIZE,
            dir_idx in 0usize..5,
        ) {
            let width = GRID_WIDTH as f32 * TILE_SIZE;
            let dir = [
                Direction::Up,
                Direction::Down,
                Direction::Left,
                Direction::Right,
                Direction::None,
            ][dir_idx];
            let next = advance(Vec2::new(x, y), dir, speed, width);

            prop_assert!(next.x >= 0.0 && next.x <= width - TILE_SIZE);
            match dir {
                Direction::Up | Direction::Down => {
                    prop_assert_eq!(next.x, x);
                    prop_assert!((next.y - y).abs() <= speed + f32::EPSILON * y.abs().max(1.0) * 4.0);
                }
                _ => prop_assert_eq!(next.y, y),
            }
        }
    }
}
