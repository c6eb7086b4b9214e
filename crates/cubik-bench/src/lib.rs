//! Benchmark profiles for the Cubik puzzle engine.
//!
//! - [`scramble_profile`]: a grid scrambled by a fixed seed
//! - [`command_cycle`]: a deterministic command stream covering every layer

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use cubik_core::{Axis, CubeSize, RotationCommand, Turn};
use cubik_engine::{generate_shuffle_seeded, MoveHistory, RotationEngine};
use cubik_grid::CubeGrid;

/// A grid of edge `size` after `moves` seeded random rotations.
///
/// Panics if `size` is outside 2..=6.
pub fn scramble_profile(size: usize, moves: usize, seed: u64) -> CubeGrid {
    let mut grid = CubeGrid::new(size).unwrap();
    let mut engine = RotationEngine::default();
    let mut history = MoveHistory::new();
    for cmd in generate_shuffle_seeded(grid.size(), moves, seed) {
        engine.apply(&mut grid, &mut history, cmd).unwrap();
    }
    grid
}

/// `len` commands cycling through every axis, layer and turn of a
/// `size`-edged grid in a fixed order.
pub fn command_cycle(size: CubeSize, len: usize) -> Vec<RotationCommand> {
    let n = size.get();
    (0..len)
        .map(|i| {
            let axis = Axis::ALL[i % 3];
            let layer = (i / 3) % n;
            let turn = if (i / (3 * n)) % 2 == 0 {
                Turn::Positive
            } else {
                Turn::Negative
            };
            RotationCommand::new(axis, layer, turn)
        })
        .collect()
}
