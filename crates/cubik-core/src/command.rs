//! Rotation commands and the records kept for undo.

use std::fmt;

use crate::direction::{Axis, Turn};

/// A request to turn one layer of the lattice by a quarter turn.
///
/// Produced by input collaborators and by the shuffle sequencer; validated
/// against the grid size when applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RotationCommand {
    /// Axis the layer is perpendicular to.
    pub axis: Axis,
    /// Coordinate of the layer along `axis`, in `[0, N)`.
    pub layer: usize,
    /// Quarter-turn sign.
    pub turn: Turn,
}

impl RotationCommand {
    /// Build a command.
    pub const fn new(axis: Axis, layer: usize, turn: Turn) -> Self {
        Self { axis, layer, turn }
    }

    /// The command that undoes this one: same layer, opposite turn.
    pub fn inverse(self) -> Self {
        Self {
            turn: self.turn.inverse(),
            ..self
        }
    }
}

impl fmt::Display for RotationCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]{}", self.axis, self.layer, self.turn)
    }
}

/// A rotation that has been committed to a grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MoveRecord {
    /// Axis the layer is perpendicular to.
    pub axis: Axis,
    /// Coordinate of the layer along `axis`.
    pub layer: usize,
    /// Quarter-turn sign.
    pub turn: Turn,
}

impl MoveRecord {
    /// The record of the move that reverts this one.
    pub fn inverse(self) -> Self {
        Self {
            turn: self.turn.inverse(),
            ..self
        }
    }

    /// The command that would replay this move.
    pub fn command(self) -> RotationCommand {
        RotationCommand::new(self.axis, self.layer, self.turn)
    }
}

impl From<RotationCommand> for MoveRecord {
    fn from(cmd: RotationCommand) -> Self {
        Self {
            axis: cmd.axis,
            layer: cmd.layer,
            turn: cmd.turn,
        }
    }
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.command(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverse_flips_turn_only() {
        let cmd = RotationCommand::new(Axis::Y, 1, Turn::Positive);
        let inv = cmd.inverse();
        assert_eq!(inv.axis, Axis::Y);
        assert_eq!(inv.layer, 1);
        assert_eq!(inv.turn, Turn::Negative);
        assert_eq!(inv.inverse(), cmd);
    }

    #[test]
    fn record_matches_command() {
        let cmd = RotationCommand::new(Axis::X, 2, Turn::Negative);
        let rec = MoveRecord::from(cmd);
        assert_eq!(rec.command(), cmd);
        assert_eq!(rec.inverse().command(), cmd.inverse());
        assert_eq!(rec.to_string(), "X[2]-90");
    }
}
