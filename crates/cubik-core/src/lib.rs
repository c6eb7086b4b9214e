//! Core types for the Cubik rotation-puzzle engine.
//!
//! This crate defines the vocabulary shared by every other Cubik crate:
//! sticker [`Direction`]s and their rotation cycle, rotation [`Axis`] and
//! [`Turn`], sticker [`Color`]s and the [`Palette`] that assigns them,
//! lattice coordinates ([`Coord3`]) and validated edge lengths
//! ([`CubeSize`]), the [`RotationCommand`] / [`MoveRecord`] pair, and the
//! error enums returned by grid, rotation and undo operations.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod color;
pub mod command;
pub mod coord;
pub mod direction;
pub mod error;

pub use color::{Color, Palette};
pub use command::{MoveRecord, RotationCommand};
pub use coord::{Coord3, CubeSize};
pub use direction::{Axis, Direction, Turn};
pub use error::{GridError, PaletteError, RotationError, UndoError};
