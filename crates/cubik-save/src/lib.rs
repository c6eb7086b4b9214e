//! Saving and loading Cubik grids.
//!
//! A grid is persisted as a [`PersistedLayout`]: the edge length plus one
//! record per unit cube in row-major order (`(x * N + y) * N + z`), each
//! holding its six faces in slot order. [`export_state`] and
//! [`import_state`] convert between a live grid and that layout; import
//! validates everything before building and never returns a partial grid.
//!
//! # Format
//!
//! The [`codec`] writes a layout as a little-endian binary container:
//!
//! ```text
//! [MAGIC "CUBK"] [VERSION u8] [cube_size u8] [cube_count u32]
//! [face_count u8] [in_play u8, direction u8, color u8] × face_count   × cube_count
//! ```
//!
//! [`grid_fingerprint`] hashes a grid's layout with FNV-1a for cheap
//! equality checks.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod codec;
pub mod error;
pub mod hash;
pub mod layout;

pub use codec::{decode_layout, encode_layout, load_grid, save_grid};
pub use error::{ImportError, PersistError};
pub use hash::{grid_fingerprint, layout_fingerprint};
pub use layout::{export_state, import_state, FaceRecord, PersistedCube, PersistedLayout};

/// Magic bytes at the start of every save file.
pub const MAGIC: [u8; 4] = *b"CUBK";

/// Current binary format version.
///
/// Version 1: cube size and count header, three bytes per face.
pub const FORMAT_VERSION: u8 = 1;
