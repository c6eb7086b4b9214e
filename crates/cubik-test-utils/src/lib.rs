//! Test fixtures for Cubik development.
//!
//! Provides ready-made grids (solved, scrambled by a known seed, or
//! deliberately broken) and enumerators over every valid rotation command,
//! for use in the integration tests of the other Cubik crates.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{
    all_commands, grid_with_swapped_labels, scrambled_grid, solved_grid, ScriptedMoves,
};
