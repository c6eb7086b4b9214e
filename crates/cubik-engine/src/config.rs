//! Session configuration, validation, and error types.
//!
//! [`SessionConfig`] is the explicit input for a [`CubeSession`](crate::CubeSession).
//! [`validate()`](SessionConfig::validate) checks it before any grid is built.

use std::error::Error;
use std::fmt;

use cubik_core::{CubeSize, GridError, Palette};

use crate::rotation::Presentation;

/// Upper bound on [`SessionConfig::shuffle_moves`].
pub const MAX_SHUFFLE_MOVES: usize = 10_000;

// ── ConfigError ─────────────────────────────────────────────────

/// Errors detected while validating a [`SessionConfig`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The configured edge length is unsupported.
    Grid(GridError),
    /// More scramble moves were requested than [`MAX_SHUFFLE_MOVES`].
    ShuffleTooLong {
        /// Requested scramble length.
        requested: usize,
        /// The allowed maximum.
        max: usize,
    },
    /// A resumed grid does not have the configured edge length.
    SizeMismatch {
        /// Edge length in the configuration.
        configured: usize,
        /// Edge length of the supplied grid.
        grid: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::ShuffleTooLong { requested, max } => {
                write!(f, "shuffle of {requested} moves exceeds the maximum of {max}")
            }
            Self::SizeMismatch { configured, grid } => {
                write!(f, "configured cube size {configured} but grid has size {grid}")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for ConfigError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

// ── SessionConfig ───────────────────────────────────────────────

/// Everything a session needs to know up front.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    /// Edge length, 2..=6. Default: 3.
    pub size: usize,
    /// Moves applied by [`CubeSession::scramble`](crate::CubeSession::scramble). Default: 20.
    pub shuffle_moves: usize,
    /// Whether committed moves wait for the presentation collaborator.
    /// Default: [`Presentation::Immediate`].
    pub presentation: Presentation,
    /// Seed for reproducible scrambles. `None` draws from thread-local
    /// entropy. Default: `None`.
    pub seed: Option<u64>,
    /// Sticker colors. Default: [`Palette::default`].
    pub palette: Palette,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            size: 3,
            shuffle_moves: 20,
            presentation: Presentation::Immediate,
            seed: None,
            palette: Palette::default(),
        }
    }
}

impl SessionConfig {
    /// Check the configuration and return the validated edge length.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::Grid`] if `size` is outside 2..=6.
    /// - [`ConfigError::ShuffleTooLong`] if `shuffle_moves` exceeds
    ///   [`MAX_SHUFFLE_MOVES`].
    pub fn validate(&self) -> Result<CubeSize, ConfigError> {
        let size = CubeSize::new(self.size)?;
        if self.shuffle_moves > MAX_SHUFFLE_MOVES {
            return Err(ConfigError::ShuffleTooLong {
                requested: self.shuffle_moves,
                max: MAX_SHUFFLE_MOVES,
            });
        }
        Ok(size)
    }
}
