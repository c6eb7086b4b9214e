//! The rotation engine: validated, recorded, gated layer turns.
//!
//! Each [`apply`](RotationEngine::apply) commits atomically: the grid is
//! borrowed mutably for the whole permutation-and-relabel step, so no
//! observer can see it half-turned. What remains is the *presentation* of
//! the committed move (animation, sound), owned by an outside collaborator.
//! In [`Presentation::Deferred`] mode the engine stays closed until that
//! collaborator calls [`finish_presentation`](RotationEngine::finish_presentation),
//! and any rotation submitted in between is rejected rather than queued.

use cubik_core::{MoveRecord, RotationCommand, RotationError};
use cubik_grid::CubeGrid;
use log::debug;

use crate::history::MoveHistory;

/// How committed rotations are presented.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Presentation {
    /// Nothing to wait for; the engine reopens as soon as a move commits.
    #[default]
    Immediate,
    /// The engine stays closed after each move until
    /// [`RotationEngine::finish_presentation`] is called.
    Deferred,
}

/// Applies rotation commands to a grid one at a time.
#[derive(Debug, Default)]
pub struct RotationEngine {
    presentation: Presentation,
    in_flight: Option<MoveRecord>,
}

impl RotationEngine {
    /// Create an idle engine.
    pub fn new(presentation: Presentation) -> Self {
        Self {
            presentation,
            in_flight: None,
        }
    }

    /// The presentation mode.
    pub fn presentation(&self) -> Presentation {
        self.presentation
    }

    /// Whether a committed move is still being presented.
    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    /// The move currently being presented, if any.
    pub fn in_flight(&self) -> Option<MoveRecord> {
        self.in_flight
    }

    /// Validate and apply `cmd`, then push its record onto `history`.
    ///
    /// # Errors
    ///
    /// - [`RotationError::RotationInProgress`] if a previous move is still
    ///   being presented.
    /// - [`RotationError::InvalidLayer`] if `cmd.layer` is not below the
    ///   grid's edge length.
    ///
    /// On error neither the grid nor the history is modified.
    pub fn apply(
        &mut self,
        grid: &mut CubeGrid,
        history: &mut MoveHistory,
        cmd: RotationCommand,
    ) -> Result<MoveRecord, RotationError> {
        if self.in_flight.is_some() {
            return Err(RotationError::RotationInProgress);
        }
        grid.rotate_layer(cmd.axis, cmd.layer, cmd.turn)?;
        let record = MoveRecord::from(cmd);
        history.push(record);
        if self.presentation == Presentation::Deferred {
            self.in_flight = Some(record);
        }
        debug!("applied {record} (history depth {})", history.len());
        Ok(record)
    }

    /// Signal that presentation of the in-flight move has finished (or was
    /// interrupted) and reopen the engine. Returns the released move.
    ///
    /// The grid already holds the committed state, so interrupting a
    /// presentation never desynchronizes it.
    pub fn finish_presentation(&mut self) -> Option<MoveRecord> {
        self.in_flight.take()
    }
}
