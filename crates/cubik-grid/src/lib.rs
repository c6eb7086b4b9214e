//! The unit-cube lattice of the Cubik puzzle engine.
//!
//! A [`CubeGrid`] owns `N³` [`UnitCube`]s stored in row-major order. Each
//! unit cube owns six [`StickerFace`]s, one per [`Direction`](cubik_core::Direction).
//! The only mutation a grid supports after construction is
//! [`CubeGrid::rotate_layer`], a quarter turn of one slice that permutes
//! cubes between slots and re-labels their stickers in one step.
//!
//! The [`compliance`] module provides assertion helpers that check the
//! structural invariants (lattice bijection, per-cube direction bijection,
//! in-play stickers facing outward) and is shared with downstream tests.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod compliance;
pub mod grid;
pub mod slice;
pub mod unit;

pub use grid::CubeGrid;
pub use slice::{layer_indices, rotate_coord, LayerIndices};
pub use unit::{StickerFace, UnitCube};
