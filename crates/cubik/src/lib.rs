//! Cubik: the state engine behind an N×N×N rotation puzzle.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Cubik sub-crates. For most users, adding `cubik` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use cubik::prelude::*;
//!
//! let config = SessionConfig {
//!     size: 3,
//!     shuffle_moves: 15,
//!     seed: Some(7),
//!     ..SessionConfig::default()
//! };
//! let mut session = CubeSession::new(config).unwrap();
//! session.rotate(RotationCommand::new(Axis::Y, 2, Turn::Positive)).unwrap();
//! session.undo().unwrap();
//! assert_eq!(session.status(), SessionStatus::Solved);
//!
//! session.scramble().unwrap();
//! assert_eq!(session.status(), SessionStatus::Playing);
//!
//! let mut file = Vec::new();
//! cubik::save::save_grid(&mut file, session.grid()).unwrap();
//! let loaded = cubik::save::load_grid(&mut file.as_slice()).unwrap();
//! assert_eq!(&loaded, session.grid());
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `cubik-core` | Directions, axes, colors, commands, errors |
//! | [`grid`] | `cubik-grid` | Unit cubes, the lattice, layer permutation |
//! | [`engine`] | `cubik-engine` | Rotation engine, undo, win check, shuffle, sessions |
//! | [`save`] | `cubik-save` | Persisted layout, binary format, fingerprints |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and errors (`cubik-core`).
pub use cubik_core as types;

/// The unit-cube lattice (`cubik-grid`).
///
/// [`grid::CubeGrid`] owns the cubes; [`grid::compliance`] checks its
/// invariants.
pub use cubik_grid as grid;

/// Rotation engine and sessions (`cubik-engine`).
pub use cubik_engine as engine;

/// Saving and loading (`cubik-save`).
pub use cubik_save as save;

/// Common imports for typical Cubik usage.
///
/// ```rust
/// use cubik::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use cubik_core::{
        Axis, Color, Coord3, CubeSize, Direction, MoveRecord, Palette, RotationCommand, Turn,
    };

    // Errors
    pub use cubik_core::{GridError, RotationError, UndoError};

    // Grid
    pub use cubik_grid::{CubeGrid, StickerFace, UnitCube};

    // Engine
    pub use cubik_engine::{
        generate_shuffle, is_solved, undo, CubeSession, MoveHistory, Presentation, RotationEngine,
        SessionConfig, SessionError, SessionEvent, SessionStatus,
    };

    // Persistence
    pub use cubik_save::{export_state, import_state, ImportError, PersistedLayout};
}
