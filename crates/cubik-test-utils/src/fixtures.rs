//! Grid and command fixtures.

use cubik_core::{Axis, Coord3, CubeSize, Direction, RotationCommand, Turn};
use cubik_engine::{generate_shuffle_seeded, MoveHistory, RotationEngine};
use cubik_grid::{CubeGrid, StickerFace, UnitCube};

/// A solved grid of edge `n`. Panics on an unsupported size.
pub fn solved_grid(n: usize) -> CubeGrid {
    CubeGrid::new(n).expect("fixture size must be 2..=6")
}

/// A grid of edge `n` after `moves` seeded random rotations, together with
/// the commands that produced it.
pub fn scrambled_grid(n: usize, moves: usize, seed: u64) -> (CubeGrid, Vec<RotationCommand>) {
    let mut grid = solved_grid(n);
    let mut history = MoveHistory::new();
    let mut engine = RotationEngine::default();
    let size = grid.size();
    let cmds: Vec<RotationCommand> = generate_shuffle_seeded(size, moves, seed).collect();
    for &cmd in &cmds {
        engine
            .apply(&mut grid, &mut history, cmd)
            .expect("generated command must apply");
    }
    (grid, cmds)
}

/// Every valid command for a grid of edge `n`: each axis, layer and turn.
pub fn all_commands(n: usize) -> Vec<RotationCommand> {
    let size = CubeSize::new(n).expect("fixture size must be 2..=6");
    let mut out = Vec::with_capacity(3 * size.get() * 2);
    for axis in Axis::ALL {
        for layer in 0..size.get() {
            for turn in [Turn::Positive, Turn::Negative] {
                out.push(RotationCommand::new(axis, layer, turn));
            }
        }
    }
    out
}

/// A copy of `grid` where the cube at `coord` has the labels of its `a`
/// and `b` faces exchanged. The cube keeps a valid direction bijection but
/// shows stickers in the wrong places.
pub fn grid_with_swapped_labels(
    grid: &CubeGrid,
    coord: Coord3,
    a: Direction,
    b: Direction,
) -> CubeGrid {
    let cubes = grid
        .cubes()
        .map(|cube| {
            if cube.coord() != coord {
                return cube.clone();
            }
            let faces = (*cube.faces()).map(|f| {
                let direction = if f.direction() == a {
                    b
                } else if f.direction() == b {
                    a
                } else {
                    f.direction()
                };
                StickerFace::new(direction, f.color(), f.in_play())
            });
            UnitCube::from_faces(coord, faces).expect("swapping labels keeps a bijection")
        })
        .collect();
    CubeGrid::from_cubes(grid.size(), cubes).expect("cubes stay in their slots")
}

/// A fixed, hand-written move script for scenario tests.
pub struct ScriptedMoves;

impl ScriptedMoves {
    /// Quarter turns touching all three axes and both outer and inner layers
    /// of a 3×3×3.
    pub fn mixed_3x3() -> Vec<RotationCommand> {
        vec![
            RotationCommand::new(Axis::Y, 2, Turn::Positive),
            RotationCommand::new(Axis::X, 0, Turn::Negative),
            RotationCommand::new(Axis::Z, 1, Turn::Positive),
            RotationCommand::new(Axis::Y, 0, Turn::Negative),
            RotationCommand::new(Axis::X, 2, Turn::Positive),
            RotationCommand::new(Axis::Z, 0, Turn::Positive),
            RotationCommand::new(Axis::Y, 1, Turn::Negative),
        ]
    }
}
