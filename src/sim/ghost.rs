//! Ghost movement policy
//!
//! No targeting: a ghost keeps going while it can, occasionally swerves, and
//! otherwise picks uniformly among the headings that are open right now.

use rand::Rng;
use rand::seq::IndexedRandom;

use super::maze::Maze;
use super::motion::{Direction, advance, is_blocked};
use super::state::Ghost;
use crate::consts::FRIGHTENED_SPEED_FACTOR;

/// Effective speed this tick
pub fn ghost_speed(ghost: &Ghost) -> f32 {
    if ghost.frightened {
        ghost.entity.speed * FRIGHTENED_SPEED_FACTOR
    } else {
        ghost.entity.speed
    }
}

/// Headings a ghost could take from where it stands
pub fn legal_directions(maze: &Maze, ghost: &Ghost) -> Vec<Direction> {
    Direction::CARDINAL
        .into_iter()
        .filter(|&dir| !is_blocked(maze, ghost.entity.pos, dir))
        .collect()
}

/// Advance one ghost by one tick.
///
/// Either moves along the current heading or spends the tick choosing a new
/// one. A ghost boxed in on all sides ends up with `Direction::None` and
/// stays put; that only happens on a malformed maze.
pub fn step_ghost<R: Rng + ?Sized>(
    ghost: &mut Ghost,
    maze: &Maze,
    redirect_chance: f64,
    rng: &mut R,
) {
    let heading_open = !is_blocked(maze, ghost.entity.pos, ghost.entity.dir);

    if heading_open && !rng.random_bool(redirect_chance) {
        let speed = ghost_speed(ghost);
        ghost.entity.pos = advance(ghost.entity.pos, ghost.entity.dir, speed, maze.pixel_width());
        return;
    }

    let legal = legal_directions(maze, ghost);
    ghost.entity.dir = legal.choose(rng).copied().unwrap_or(Direction::None);
    if ghost.entity.dir == Direction::None {
        log::debug!(
            "Ghost {} has no open heading at {:?}",
            ghost.id,
            ghost.entity.pos
        );
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    use super::*;
    use crate::consts::TILE_SIZE;
    use crate::sim::layout::LevelLayout;

    fn board(text: &str) -> (Maze, Ghost) {
        let layout = LevelLayout::parse(text).unwrap();
        let ghost = Ghost::spawn(&layout.ghost_spawns[0], 1.5);
        (layout.maze, ghost)
    }

    #[test]
    fn test_continues_on_open_heading() {
        let (maze, mut ghost) = board("#######\n#P M  #\n#######\n");
        ghost.entity.dir = Direction::Right;
        let mut rng = Pcg32::seed_from_u64(1);

        let start = ghost.entity.pos;
        step_ghost(&mut ghost, &maze, 0.0, &mut rng);
        assert_eq!(ghost.entity.pos, start + Vec2::new(1.5, 0.0));
        assert_eq!(ghost.entity.dir, Direction::Right);
    }

    #[test]
    fn test_frightened_moves_at_half_speed() {
        let (maze, mut ghost) = board("#######\n#P M  #\n#######\n");
        ghost.entity.dir = Direction::Left;
        ghost.frightened = true;
        let mut rng = Pcg32::seed_from_u64(1);

        let start = ghost.entity.pos;
        step_ghost(&mut ghost, &maze, 0.0, &mut rng);
        assert_eq!(ghost.entity.pos, start - Vec2::new(0.75, 0.0));
    }

    #[test]
    fn test_blocked_heading_picks_a_legal_one_without_moving() {
        // Dead end to the north; only east/west are open.
        let (maze, mut ghost) = board("#######\n#P M  #\n#######\n");
        ghost.entity.dir = Direction::Up;
        let start = ghost.entity.pos;

        for seed in 0..32 {
            let mut g = ghost.clone();
            let mut rng = Pcg32::seed_from_u64(seed);
            step_ghost(&mut g, &maze, 0.0, &mut rng);
            assert_eq!(g.entity.pos, start);
            assert!(matches!(g.entity.dir, Direction::Left | Direction::Right));
        }
        ghost.entity.dir = Direction::None;
        let mut rng = Pcg32::seed_from_u64(3);
        step_ghost(&mut ghost, &maze, 0.0, &mut rng);
        assert_ne!(ghost.entity.dir, Direction::None);
    }

    #[test]
    fn test_redirect_samples_every_legal_heading() {
        // Crossroads: all four headings open.
        let (maze, ghost) = board("#####\n## ##\n# M #\n## ##\n#P###\n");
        assert_eq!(legal_directions(&maze, &ghost).len(), 4);

        let mut seen = Vec::new();
        let mut rng = Pcg32::seed_from_u64(42);
        for _ in 0..200 {
            let mut g = ghost.clone();
            g.entity.dir = Direction::Up;
            step_ghost(&mut g, &maze, 1.0, &mut rng);
            if !seen.contains(&g.entity.dir) {
                seen.push(g.entity.dir);
            }
        }
        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn test_enclosed_ghost_freezes() {
        let (maze, mut ghost) = board("#####\n#P###\n##M##\n#####\n");
        ghost.entity.dir = Direction::Down;
        let start = ghost.entity.pos;
        let mut rng = Pcg32::seed_from_u64(9);

        for _ in 0..10 {
            step_ghost(&mut ghost, &maze, 0.05, &mut rng);
            assert_eq!(ghost.entity.dir, Direction::None);
            assert_eq!(ghost.entity.pos, start);
        }
    }

    #[test]
    fn test_same_seed_same_path() {
        let layout = LevelLayout::classic();
        let run = |seed| {
            let mut ghost = Ghost::spawn(&layout.ghost_spawns[0], 1.5);
            let mut rng = Pcg32::seed_from_u64(seed);
            for _ in 0..500 {
                step_ghost(&mut ghost, &layout.maze, 0.05, &mut rng);
            }
            ghost.entity.pos
        };
        assert_eq!(run(5), run(5));
        assert!(run(5).x >= 0.0 && run(5).x <= layout.maze.pixel_width() - TILE_SIZE);
    }
}
