//! Error types for importing and decoding saved grids.

use std::error::Error;
use std::fmt;
use std::io;

use cubik_core::{Color, Direction, GridError};

// ── ImportError ─────────────────────────────────────────────────

/// A [`PersistedLayout`](crate::PersistedLayout) that does not describe a
/// valid grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ImportError {
    /// The edge length is outside 2..=6.
    InvalidSize {
        /// The rejected edge length.
        size: usize,
    },
    /// The number of cube records is not `size³`.
    CellCountMismatch {
        /// `size³`.
        expected: usize,
        /// Records supplied.
        found: usize,
    },
    /// A cube record does not have exactly six faces.
    FaceCountMismatch {
        /// Row-major index of the cube record.
        index: usize,
        /// Faces supplied.
        found: usize,
    },
    /// Two faces of one cube carry the same direction.
    DuplicateDirection {
        /// Row-major index of the cube record.
        index: usize,
        /// The repeated direction.
        direction: Direction,
    },
    /// A face's in-play flag disagrees with whether it points out of the
    /// lattice at that cube's coordinate.
    InPlayMismatch {
        /// Row-major index of the cube record.
        index: usize,
        /// Slot of the offending face.
        slot: usize,
    },
    /// A face's color disagrees with its in-play flag: outer faces need a
    /// sticker color, interior faces must be [`Color::Neutral`].
    ColorMismatch {
        /// Row-major index of the cube record.
        index: usize,
        /// Slot of the offending face.
        slot: usize,
    },
    /// The outer stickers do not use exactly six colors.
    ColorCount {
        /// Distinct colors found on in-play faces.
        found: usize,
    },
    /// A sticker color does not appear on exactly `N²` outer faces.
    StickerCount {
        /// The miscounted color.
        color: Color,
        /// Outer faces showing it.
        found: usize,
        /// `N²`.
        expected: usize,
    },
    /// The grid rejected the assembled cubes.
    Grid(GridError),
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { size } => {
                write!(f, "cube size {size} is outside the supported range 2..=6")
            }
            Self::CellCountMismatch { expected, found } => {
                write!(f, "expected {expected} cube records, found {found}")
            }
            Self::FaceCountMismatch { index, found } => {
                write!(f, "cube record {index} has {found} faces, expected 6")
            }
            Self::DuplicateDirection { index, direction } => {
                write!(f, "cube record {index} has two faces facing {direction}")
            }
            Self::InPlayMismatch { index, slot } => {
                write!(f, "cube record {index} face {slot} has an inconsistent in-play flag")
            }
            Self::ColorMismatch { index, slot } => write!(
                f,
                "cube record {index} face {slot} has a color inconsistent with its in-play flag"
            ),
            Self::ColorCount { found } => {
                write!(f, "outer stickers use {found} colors, expected 6")
            }
            Self::StickerCount {
                color,
                found,
                expected,
            } => write!(f, "{color} appears on {found} outer stickers, expected {expected}"),
            Self::Grid(e) => write!(f, "grid: {e}"),
        }
    }
}

impl Error for ImportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for ImportError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

// ── PersistError ────────────────────────────────────────────────

/// Errors from reading or writing the binary save format.
#[derive(Debug)]
pub enum PersistError {
    /// An I/O error, including truncated input.
    Io(io::Error),
    /// The data does not start with `b"CUBK"`.
    InvalidMagic,
    /// The format version is not supported by this build.
    UnsupportedVersion {
        /// The version found in the data.
        found: u8,
    },
    /// A record could not be encoded or decoded.
    MalformedRecord {
        /// Human-readable description of what went wrong.
        detail: String,
    },
    /// A direction tag is not recognized.
    UnknownDirection {
        /// The unrecognized tag.
        tag: u8,
    },
    /// A color tag is not recognized.
    UnknownColor {
        /// The unrecognized tag.
        tag: u8,
    },
    /// The decoded layout is not a valid grid.
    Import(ImportError),
}

impl fmt::Display for PersistError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::InvalidMagic => write!(f, "invalid magic bytes (expected b\"CUBK\")"),
            Self::UnsupportedVersion { found } => {
                write!(f, "unsupported format version {found}")
            }
            Self::MalformedRecord { detail } => write!(f, "malformed record: {detail}"),
            Self::UnknownDirection { tag } => write!(f, "unknown direction tag {tag}"),
            Self::UnknownColor { tag } => write!(f, "unknown color tag {tag}"),
            Self::Import(e) => write!(f, "invalid layout: {e}"),
        }
    }
}

impl Error for PersistError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Import(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for PersistError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<ImportError> for PersistError {
    fn from(e: ImportError) -> Self {
        Self::Import(e)
    }
}
