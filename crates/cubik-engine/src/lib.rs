//! Rotation engine and game sessions for the Cubik puzzle.
//!
//! The free-standing pieces operate on a caller-owned
//! [`CubeGrid`](cubik_grid::CubeGrid) and [`MoveHistory`]:
//!
//! - [`RotationEngine`]: validates and applies [`RotationCommand`](cubik_core::RotationCommand)s,
//!   records them, and gates re-entry while a rotation is being presented.
//! - [`undo`]: reverts the most recent recorded move.
//! - [`is_solved`]: the win condition.
//! - [`generate_shuffle`] / [`generate_shuffle_seeded`]: random scrambles.
//!
//! [`CubeSession`] bundles all of them for one game, driven by a validated
//! [`SessionConfig`] and publishing [`SessionEvent`]s to subscribers.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod history;
pub mod rotation;
pub mod session;
pub mod shuffle;
pub mod win;

pub use config::{ConfigError, SessionConfig, MAX_SHUFFLE_MOVES};
pub use history::{undo, MoveHistory};
pub use rotation::{Presentation, RotationEngine};
pub use session::{CubeSession, SessionError, SessionEvent, SessionStatus};
pub use shuffle::{generate_shuffle, generate_shuffle_seeded, ShuffleSequence};
pub use win::{is_solved, uniform_color};
