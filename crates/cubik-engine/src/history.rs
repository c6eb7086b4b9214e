//! Move history and single-step undo.

use cubik_core::{MoveRecord, RotationError, UndoError};
use cubik_grid::CubeGrid;
use log::debug;

use crate::rotation::RotationEngine;

/// Last-in-first-out record of applied moves.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveHistory {
    moves: Vec<MoveRecord>,
}

impl MoveHistory {
    /// An empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a committed move.
    pub fn push(&mut self, record: MoveRecord) {
        self.moves.push(record);
    }

    /// Remove and return the most recent move.
    pub fn pop(&mut self) -> Option<MoveRecord> {
        self.moves.pop()
    }

    /// The most recent move.
    pub fn last(&self) -> Option<&MoveRecord> {
        self.moves.last()
    }

    /// Number of recorded moves.
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Whether nothing is recorded.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Forget every recorded move.
    pub fn clear(&mut self) {
        self.moves.clear();
    }

    /// Recorded moves, oldest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &MoveRecord> + '_ {
        self.moves.iter()
    }
}

/// Revert the most recent move in `history`.
///
/// Pops the last record and applies its inverse through `engine`. The
/// record `apply` pushes for the inverse is discarded, so undo leaves no
/// redo entry. Returns the inverse move that was applied, for presentation.
///
/// # Errors
///
/// - [`UndoError::EmptyHistory`] if there is nothing to undo.
/// - [`UndoError::Rotation`] wrapping
///   [`RotationError::RotationInProgress`]
///   if the engine is still presenting a move.
///
/// On error the grid and history are unchanged.
pub fn undo(
    engine: &mut RotationEngine,
    grid: &mut CubeGrid,
    history: &mut MoveHistory,
) -> Result<MoveRecord, UndoError> {
    if engine.is_busy() {
        return Err(RotationError::RotationInProgress.into());
    }
    let last = history.pop().ok_or(UndoError::EmptyHistory)?;
    match engine.apply(grid, history, last.inverse().command()) {
        Ok(applied) => {
            history.pop();
            debug!("undid {last} (history depth {})", history.len());
            Ok(applied)
        }
        Err(e) => {
            history.push(last);
            Err(e.into())
        }
    }
}
