//! Random scramble sequences.

use cubik_core::{Axis, CubeSize, RotationCommand, Turn};
use rand::rngs::ThreadRng;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A finite, consuming sequence of random rotation commands.
///
/// Each command picks its axis, layer and turn uniformly and is always
/// valid for a grid of the size the sequence was built for. Not `Clone`:
/// once consumed it cannot be restarted.
#[derive(Debug)]
pub struct ShuffleSequence<R> {
    rng: R,
    size: CubeSize,
    remaining: usize,
}

impl<R: Rng> ShuffleSequence<R> {
    /// Draw `count` commands for a `size`-edged grid from `rng`.
    pub fn with_rng(size: CubeSize, count: usize, rng: R) -> Self {
        Self {
            rng,
            size,
            remaining: count,
        }
    }

    /// Commands still to be produced.
    pub fn remaining(&self) -> usize {
        self.remaining
    }
}

impl<R: Rng> Iterator for ShuffleSequence<R> {
    type Item = RotationCommand;

    fn next(&mut self) -> Option<RotationCommand> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let axis = Axis::ALL[self.rng.random_range(0..Axis::ALL.len())];
        let layer = self.rng.random_range(0..self.size.get());
        let turn = if self.rng.random_bool(0.5) {
            Turn::Positive
        } else {
            Turn::Negative
        };
        Some(RotationCommand::new(axis, layer, turn))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<R: Rng> ExactSizeIterator for ShuffleSequence<R> {}

/// `count` random commands for a `size`-edged grid, from thread-local entropy.
pub fn generate_shuffle(size: CubeSize, count: usize) -> ShuffleSequence<ThreadRng> {
    ShuffleSequence::with_rng(size, count, rand::rng())
}

/// `count` reproducible random commands for a `size`-edged grid.
///
/// The same `(size, count, seed)` always yields the same sequence.
pub fn generate_shuffle_seeded(
    size: CubeSize,
    count: usize,
    seed: u64,
) -> ShuffleSequence<ChaCha8Rng> {
    ShuffleSequence::with_rng(size, count, ChaCha8Rng::seed_from_u64(seed))
}
