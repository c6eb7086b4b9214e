//! Error types shared across the Cubik crates.
//!
//! Grid construction, rotation and undo each have their own enum so callers
//! can match on exactly the failures an operation can produce.

use std::error::Error;
use std::fmt;

use crate::color::Color;
use crate::coord::Coord3;
use crate::direction::Direction;

// ── GridError ───────────────────────────────────────────────────

/// Errors from building or indexing a cube grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// Edge length outside the supported `2..=6` range.
    InvalidSize {
        /// The rejected edge length.
        requested: usize,
    },
    /// A coordinate component is negative or not below the edge length.
    OutOfRange {
        /// The rejected coordinate.
        coord: Coord3,
        /// The grid's edge length.
        size: usize,
    },
    /// The number of unit cubes does not equal `N³`.
    CellCountMismatch {
        /// `N³`.
        expected: usize,
        /// Cubes supplied.
        found: usize,
    },
    /// A unit cube's coordinate does not match its row-major slot.
    MisplacedCube {
        /// Row-major slot the cube was supplied in.
        index: usize,
        /// The coordinate the cube claims.
        coord: Coord3,
    },
    /// Two faces of one unit cube carry the same direction label.
    DuplicateDirection {
        /// The offending cube.
        coord: Coord3,
        /// The repeated label.
        direction: Direction,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { requested } => {
                write!(f, "cube size {requested} is outside the supported range 2..=6")
            }
            Self::OutOfRange { coord, size } => {
                write!(f, "coordinate {coord} is outside a grid of edge {size}")
            }
            Self::CellCountMismatch { expected, found } => {
                write!(f, "expected {expected} unit cubes, found {found}")
            }
            Self::MisplacedCube { index, coord } => {
                write!(f, "unit cube at slot {index} claims coordinate {coord}")
            }
            Self::DuplicateDirection { coord, direction } => {
                write!(f, "unit cube at {coord} has two faces labelled {direction}")
            }
        }
    }
}

impl Error for GridError {}

// ── RotationError ───────────────────────────────────────────────

/// Errors from applying a rotation command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RotationError {
    /// The layer index is not in `[0, N)`.
    InvalidLayer {
        /// The rejected layer index.
        layer: usize,
        /// The grid's edge length.
        size: usize,
    },
    /// A previous rotation has not finished presenting.
    ///
    /// Callers should defer and retry once the presentation completes.
    RotationInProgress,
}

impl fmt::Display for RotationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLayer { layer, size } => {
                write!(f, "layer {layer} is outside a grid of edge {size}")
            }
            Self::RotationInProgress => write!(f, "a rotation is still in progress"),
        }
    }
}

impl Error for RotationError {}

// ── UndoError ───────────────────────────────────────────────────

/// Errors from undoing the most recent move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UndoError {
    /// Nothing has been recorded.
    EmptyHistory,
    /// Applying the inverse move failed.
    Rotation(RotationError),
}

impl fmt::Display for UndoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyHistory => write!(f, "no moves to undo"),
            Self::Rotation(e) => write!(f, "undo failed: {e}"),
        }
    }
}

impl Error for UndoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Rotation(e) => Some(e),
            Self::EmptyHistory => None,
        }
    }
}

impl From<RotationError> for UndoError {
    fn from(e: RotationError) -> Self {
        Self::Rotation(e)
    }
}

// ── PaletteError ────────────────────────────────────────────────

/// Errors from building a [`Palette`](crate::Palette).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PaletteError {
    /// Two directions were given the same color.
    DuplicateColor {
        /// The repeated color.
        color: Color,
    },
    /// An outer direction was given the interior color.
    NeutralColor {
        /// The direction that received [`Color::Neutral`].
        direction: Direction,
    },
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateColor { color } => {
                write!(f, "color {color} is assigned to more than one direction")
            }
            Self::NeutralColor { direction } => {
                write!(f, "direction {direction} cannot use the neutral color")
            }
        }
    }
}

impl Error for PaletteError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undo_error_exposes_source() {
        let e = UndoError::from(RotationError::RotationInProgress);
        assert!(e.source().is_some());
        assert!(UndoError::EmptyHistory.source().is_none());
        assert_eq!(e.to_string(), "undo failed: a rotation is still in progress");
    }

    #[test]
    fn grid_error_messages_name_the_problem() {
        let e = GridError::OutOfRange {
            coord: Coord3::new(3, 0, -1),
            size: 3,
        };
        assert_eq!(e.to_string(), "coordinate (3, 0, -1) is outside a grid of edge 3");
    }
}
