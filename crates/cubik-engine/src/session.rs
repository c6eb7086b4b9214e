//! One game on one cube.
//!
//! [`CubeSession`] owns a grid, its move history and a rotation engine, and
//! layers the game rules on top: scrambles are not undoable and never end
//! the game, the win check runs after every player move and undo, and a
//! solved session refuses further moves until [`reset`](CubeSession::reset).
//!
//! # Events
//!
//! Presentation collaborators call [`subscribe`](CubeSession::subscribe) to
//! receive a [`SessionEvent`] for every state change. Events are sent after
//! the change has committed, in the order the changes happened.
//! Disconnected receivers are dropped on the next send.

use std::error::Error;
use std::fmt;

use crossbeam_channel::{Receiver, Sender};
use cubik_core::{CubeSize, MoveRecord, RotationCommand, RotationError, UndoError};
use cubik_grid::CubeGrid;
use log::{info, warn};
use rand::Rng;

use crate::config::{ConfigError, SessionConfig};
use crate::history::{undo, MoveHistory};
use crate::rotation::RotationEngine;
use crate::shuffle::{generate_shuffle, generate_shuffle_seeded, ShuffleSequence};
use crate::win::is_solved;

// Compile-time assertion: CubeSession can move to another thread.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<CubeSession>();
    }
};

// ── SessionStatus / SessionEvent ────────────────────────────────

/// Whether the game is still running.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionStatus {
    /// Moves are accepted.
    Playing,
    /// A player move solved the cube; moves are refused until reset.
    Solved,
}

/// A committed change, published to subscribers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    /// A player move was applied.
    Rotated {
        /// The applied move.
        record: MoveRecord,
    },
    /// The last player move was reverted.
    Undone {
        /// The inverse move that was applied.
        record: MoveRecord,
    },
    /// The grid was scrambled.
    Scrambled {
        /// Number of random moves applied.
        moves: usize,
    },
    /// The cube became solved.
    Solved {
        /// Player moves on the board when it was solved.
        moves: usize,
    },
    /// The session was returned to a fresh solved grid.
    Reset,
}

// ── SessionError ────────────────────────────────────────────────

/// Errors returned by [`CubeSession`] operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionError {
    /// The rotation was rejected.
    Rotation(RotationError),
    /// The undo was rejected.
    Undo(UndoError),
    /// The cube is solved; reset before playing again.
    Finished,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rotation(e) => write!(f, "rotation: {e}"),
            Self::Undo(e) => write!(f, "undo: {e}"),
            Self::Finished => write!(f, "the cube is solved; reset to play again"),
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Rotation(e) => Some(e),
            Self::Undo(e) => Some(e),
            Self::Finished => None,
        }
    }
}

impl From<RotationError> for SessionError {
    fn from(e: RotationError) -> Self {
        Self::Rotation(e)
    }
}

impl From<UndoError> for SessionError {
    fn from(e: UndoError) -> Self {
        Self::Undo(e)
    }
}

// ── CubeSession ─────────────────────────────────────────────────

/// A single game: one grid, exclusively owned.
///
/// # Example
///
/// ```
/// use cubik_core::{Axis, RotationCommand, Turn};
/// use cubik_engine::{CubeSession, SessionConfig, SessionStatus};
///
/// let mut session = CubeSession::new(SessionConfig::default()).unwrap();
/// let cmd = RotationCommand::new(Axis::Y, 0, Turn::Positive);
/// session.rotate(cmd).unwrap();
/// assert_eq!(session.status(), SessionStatus::Playing);
/// session.rotate(cmd.inverse()).unwrap();
/// assert_eq!(session.status(), SessionStatus::Solved);
/// ```
pub struct CubeSession {
    config: SessionConfig,
    size: CubeSize,
    grid: CubeGrid,
    solved: CubeGrid,
    history: MoveHistory,
    engine: RotationEngine,
    status: SessionStatus,
    scrambles: u64,
    subscribers: Vec<Sender<SessionEvent>>,
}

impl CubeSession {
    /// Start a session on a solved grid.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `config` fails validation.
    pub fn new(config: SessionConfig) -> Result<Self, ConfigError> {
        let size = config.validate()?;
        let solved = CubeGrid::with_palette(size.get(), &config.palette)?;
        Ok(Self::assemble(config, size, solved.clone(), solved))
    }

    /// Continue a session on a previously saved grid. No scramble is applied.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `config` fails validation or its size
    /// differs from the grid's.
    pub fn resume(config: SessionConfig, grid: CubeGrid) -> Result<Self, ConfigError> {
        let size = config.validate()?;
        if grid.size() != size {
            return Err(ConfigError::SizeMismatch {
                configured: size.get(),
                grid: grid.size().get(),
            });
        }
        let solved = CubeGrid::with_palette(size.get(), &config.palette)?;
        Ok(Self::assemble(config, size, grid, solved))
    }

    fn assemble(config: SessionConfig, size: CubeSize, grid: CubeGrid, solved: CubeGrid) -> Self {
        Self {
            engine: RotationEngine::new(config.presentation),
            config,
            size,
            grid,
            solved,
            history: MoveHistory::new(),
            status: SessionStatus::Playing,
            scrambles: 0,
            subscribers: Vec::new(),
        }
    }

    /// Receive every future [`SessionEvent`].
    pub fn subscribe(&mut self) -> Receiver<SessionEvent> {
        let (tx, rx) = crossbeam_channel::unbounded();
        self.subscribers.push(tx);
        rx
    }

    /// Scramble the grid with [`SessionConfig::shuffle_moves`] random moves.
    ///
    /// Each move is applied and its presentation completed before the next.
    /// Scramble moves cannot be undone and do not trigger the win check;
    /// afterwards the history is empty and the session is
    /// [`Playing`](SessionStatus::Playing). With a configured seed,
    /// successive scrambles are reproducible but differ from each other.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Rotation`] with
    /// [`RotationError::RotationInProgress`] if a move is still being
    /// presented.
    pub fn scramble(&mut self) -> Result<usize, SessionError> {
        if self.engine.is_busy() {
            return Err(RotationError::RotationInProgress.into());
        }
        let count = self.config.shuffle_moves;
        let applied = match self.config.seed {
            Some(seed) => {
                let seed = seed.wrapping_add(self.scrambles);
                self.drive(generate_shuffle_seeded(self.size, count, seed))?
            }
            None => self.drive(generate_shuffle(self.size, count))?,
        };
        self.scrambles += 1;
        self.history.clear();
        self.status = SessionStatus::Playing;
        info!("scrambled {} grid with {applied} moves", self.size);
        self.emit(SessionEvent::Scrambled { moves: applied });
        Ok(applied)
    }

    fn drive<R: Rng>(&mut self, sequence: ShuffleSequence<R>) -> Result<usize, RotationError> {
        let mut applied = 0;
        for cmd in sequence {
            self.engine.apply(&mut self.grid, &mut self.history, cmd)?;
            self.engine.finish_presentation();
            applied += 1;
        }
        Ok(applied)
    }

    /// Apply a player move, then check for a win.
    ///
    /// # Errors
    ///
    /// - [`SessionError::Finished`] if the cube is already solved.
    /// - [`SessionError::Rotation`] if the engine rejects the command.
    pub fn rotate(&mut self, cmd: RotationCommand) -> Result<MoveRecord, SessionError> {
        if self.status == SessionStatus::Solved {
            return Err(SessionError::Finished);
        }
        let record = self.engine.apply(&mut self.grid, &mut self.history, cmd)?;
        self.emit(SessionEvent::Rotated { record });
        self.check_win();
        Ok(record)
    }

    /// Revert the last player move, then check for a win.
    ///
    /// # Errors
    ///
    /// - [`SessionError::Finished`] if the cube is already solved.
    /// - [`SessionError::Undo`] if there is nothing to undo or a move is
    ///   still being presented.
    pub fn undo(&mut self) -> Result<MoveRecord, SessionError> {
        if self.status == SessionStatus::Solved {
            return Err(SessionError::Finished);
        }
        let record = undo(&mut self.engine, &mut self.grid, &mut self.history)?;
        self.emit(SessionEvent::Undone { record });
        self.check_win();
        Ok(record)
    }

    fn check_win(&mut self) {
        if is_solved(&self.grid) {
            self.status = SessionStatus::Solved;
            let moves = self.history.len();
            info!("{} grid solved with {moves} moves on the board", self.size);
            self.emit(SessionEvent::Solved { moves });
        }
    }

    /// Release the presentation gate. See
    /// [`RotationEngine::finish_presentation`].
    pub fn finish_presentation(&mut self) -> Option<MoveRecord> {
        self.engine.finish_presentation()
    }

    /// Discard the current game and start again on a solved grid of the
    /// configured size. Any in-flight presentation is abandoned.
    pub fn reset(&mut self) {
        self.grid = self.solved.clone();
        self.history.clear();
        self.engine = RotationEngine::new(self.config.presentation);
        self.status = SessionStatus::Playing;
        info!("session reset to a solved {} grid", self.size);
        self.emit(SessionEvent::Reset);
    }

    fn emit(&mut self, event: SessionEvent) {
        self.subscribers.retain(|tx| match tx.send(event.clone()) {
            Ok(()) => true,
            Err(_) => {
                warn!("dropping disconnected session subscriber");
                false
            }
        });
    }

    /// The grid. Export it with the save crate or hand it to a renderer.
    pub fn grid(&self) -> &CubeGrid {
        &self.grid
    }

    /// Undoable player moves, oldest first.
    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    /// Number of player moves that can still be undone.
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// Whether the game is still running.
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// The validated edge length.
    pub fn size(&self) -> CubeSize {
        self.size
    }

    /// The configuration this session was built from.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Whether a committed move is still being presented.
    pub fn is_busy(&self) -> bool {
        self.engine.is_busy()
    }
}

impl fmt::Debug for CubeSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CubeSession")
            .field("size", &self.size)
            .field("status", &self.status)
            .field("moves", &self.history.len())
            .field("busy", &self.engine.is_busy())
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
