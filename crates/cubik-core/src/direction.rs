//! Sticker directions, rotation axes and quarter turns.
//!
//! [`Direction`] has two orderings. [`Direction::ALL`] is the *slot* order:
//! the fixed order in which a unit cube stores its six faces and in which
//! they are persisted. [`Direction::CYCLE`] is the *rotation* order used to
//! re-label stickers after a quarter turn. Opposite directions sit three
//! steps apart in the cycle, so removing the pair that lies along a rotation
//! axis leaves the other four in right-handed order around that axis.

use std::fmt;

use crate::coord::{Coord3, CubeSize};

// ── Axis ────────────────────────────────────────────────────────

/// A rotation axis of the lattice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    /// Runs West → East.
    X,
    /// Runs Bottom → Top.
    Y,
    /// Runs South → North.
    Z,
}

impl Axis {
    /// All three axes in declaration order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// The two axes spanning a slice perpendicular to `self`, in the order
    /// `(a, b)` such that a positive quarter turn maps `(a, b)` to
    /// `(N-1-b, a)`.
    pub fn plane(self) -> (Axis, Axis) {
        match self {
            Axis::X => (Axis::Y, Axis::Z),
            Axis::Y => (Axis::Z, Axis::X),
            Axis::Z => (Axis::X, Axis::Y),
        }
    }

    /// The direction pointing along the positive end of this axis.
    pub fn positive(self) -> Direction {
        match self {
            Axis::X => Direction::East,
            Axis::Y => Direction::Top,
            Axis::Z => Direction::North,
        }
    }

    /// The direction pointing along the negative end of this axis.
    pub fn negative(self) -> Direction {
        self.positive().opposite()
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "X"),
            Axis::Y => write!(f, "Y"),
            Axis::Z => write!(f, "Z"),
        }
    }
}

// ── Turn ────────────────────────────────────────────────────────

/// A quarter turn about an axis, right-handed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Turn {
    /// +90°.
    Positive,
    /// -90°.
    Negative,
}

impl Turn {
    /// The opposite quarter turn.
    pub fn inverse(self) -> Turn {
        match self {
            Turn::Positive => Turn::Negative,
            Turn::Negative => Turn::Positive,
        }
    }

    /// Signed angle in degrees (`90` or `-90`).
    pub fn degrees(self) -> i32 {
        match self {
            Turn::Positive => 90,
            Turn::Negative => -90,
        }
    }

    /// Parse a signed angle. Only `90` and `-90` are quarter turns.
    pub fn from_degrees(degrees: i32) -> Option<Turn> {
        match degrees {
            90 => Some(Turn::Positive),
            -90 => Some(Turn::Negative),
            _ => None,
        }
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:+}", self.degrees())
    }
}

// ── Direction ───────────────────────────────────────────────────

/// The outward direction a sticker faces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// +Y.
    Top,
    /// -Y.
    Bottom,
    /// +Z.
    North,
    /// -Z.
    South,
    /// +X.
    East,
    /// -X.
    West,
}

impl Direction {
    /// Slot order: how a unit cube stores and persists its faces.
    pub const ALL: [Direction; 6] = [
        Direction::Top,
        Direction::Bottom,
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Rotation order. `next` steps forward, `prev` steps back, wrapping.
    pub const CYCLE: [Direction; 6] = [
        Direction::East,
        Direction::South,
        Direction::Top,
        Direction::West,
        Direction::North,
        Direction::Bottom,
    ];

    /// Position of this direction in [`Direction::ALL`].
    pub fn slot(self) -> usize {
        match self {
            Direction::Top => 0,
            Direction::Bottom => 1,
            Direction::North => 2,
            Direction::South => 3,
            Direction::East => 4,
            Direction::West => 5,
        }
    }

    /// Inverse of [`Direction::slot`].
    pub fn from_slot(slot: usize) -> Option<Direction> {
        Direction::ALL.get(slot).copied()
    }

    fn cycle_position(self) -> usize {
        match self {
            Direction::East => 0,
            Direction::South => 1,
            Direction::Top => 2,
            Direction::West => 3,
            Direction::North => 4,
            Direction::Bottom => 5,
        }
    }

    /// One step forward around [`Direction::CYCLE`].
    pub fn next(self) -> Direction {
        Direction::CYCLE[(self.cycle_position() + 1) % 6]
    }

    /// One step backward around [`Direction::CYCLE`].
    pub fn prev(self) -> Direction {
        Direction::CYCLE[(self.cycle_position() + 5) % 6]
    }

    /// The direction facing the other way along the same axis.
    pub fn opposite(self) -> Direction {
        Direction::CYCLE[(self.cycle_position() + 3) % 6]
    }

    /// The axis this direction lies along.
    pub fn axis(self) -> Axis {
        match self {
            Direction::East | Direction::West => Axis::X,
            Direction::Top | Direction::Bottom => Axis::Y,
            Direction::North | Direction::South => Axis::Z,
        }
    }

    /// Whether this direction points toward the positive end of its axis.
    pub fn is_positive(self) -> bool {
        matches!(self, Direction::East | Direction::Top | Direction::North)
    }

    /// The label this direction takes after a quarter turn about `axis`.
    ///
    /// Directions lying along `axis` are fixed. The other four step through
    /// the cycle, skipping the axis pair: forward for [`Turn::Positive`],
    /// backward for [`Turn::Negative`]. The result is a bijection on the six
    /// directions for every `(axis, turn)`.
    pub fn rotated(self, axis: Axis, turn: Turn) -> Direction {
        if self.axis() == axis {
            return self;
        }
        let step = |d: Direction| match turn {
            Turn::Positive => d.next(),
            Turn::Negative => d.prev(),
        };
        let mut d = step(self);
        while d.axis() == axis {
            d = step(d);
        }
        d
    }

    /// Whether a sticker facing this way at `coord` lies on the outer shell
    /// of a `size`-edged lattice.
    pub fn points_outward(self, coord: Coord3, size: CubeSize) -> bool {
        let edge = size.get() as i32 - 1;
        let component = coord.component(self.axis());
        if self.is_positive() {
            component == edge
        } else {
            component == 0
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Top => "top",
            Direction::Bottom => "bottom",
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_and_prev_are_inverse() {
        for d in Direction::ALL {
            assert_eq!(d.next().prev(), d);
            assert_eq!(d.prev().next(), d);
        }
    }

    #[test]
    fn cycle_wraps_after_six_steps() {
        for d in Direction::ALL {
            let mut cur = d;
            for _ in 0..6 {
                cur = cur.next();
            }
            assert_eq!(cur, d);
        }
    }

    #[test]
    fn opposite_shares_axis_and_flips_sign() {
        for d in Direction::ALL {
            let o = d.opposite();
            assert_ne!(d, o);
            assert_eq!(d.axis(), o.axis());
            assert_ne!(d.is_positive(), o.is_positive());
            assert_eq!(o.opposite(), d);
        }
    }

    #[test]
    fn slot_round_trips() {
        for (i, d) in Direction::ALL.iter().enumerate() {
            assert_eq!(d.slot(), i);
            assert_eq!(Direction::from_slot(i), Some(*d));
        }
        assert_eq!(Direction::from_slot(6), None);
    }

    #[test]
    fn rotation_fixes_axis_directions() {
        for axis in Axis::ALL {
            for turn in [Turn::Positive, Turn::Negative] {
                assert_eq!(axis.positive().rotated(axis, turn), axis.positive());
                assert_eq!(axis.negative().rotated(axis, turn), axis.negative());
            }
        }
    }

    #[test]
    fn rotation_is_a_bijection() {
        for axis in Axis::ALL {
            for turn in [Turn::Positive, Turn::Negative] {
                let mut seen: Vec<Direction> =
                    Direction::ALL.iter().map(|d| d.rotated(axis, turn)).collect();
                seen.sort();
                seen.dedup();
                assert_eq!(seen.len(), 6, "{axis} {turn} collapses labels");
            }
        }
    }

    #[test]
    fn rotation_turns_are_inverse() {
        for axis in Axis::ALL {
            for d in Direction::ALL {
                let there = d.rotated(axis, Turn::Positive);
                assert_eq!(there.rotated(axis, Turn::Negative), d);
            }
        }
    }

    #[test]
    fn four_quarter_turns_are_identity() {
        for axis in Axis::ALL {
            for d in Direction::ALL {
                let mut cur = d;
                for _ in 0..4 {
                    cur = cur.rotated(axis, Turn::Positive);
                }
                assert_eq!(cur, d);
            }
        }
    }

    #[test]
    fn positive_turns_are_right_handed() {
        // About +Z, +X goes to +Y.
        assert_eq!(Direction::East.rotated(Axis::Z, Turn::Positive), Direction::Top);
        assert_eq!(Direction::Top.rotated(Axis::Z, Turn::Positive), Direction::West);
        // About +X, +Y goes to +Z.
        assert_eq!(Direction::Top.rotated(Axis::X, Turn::Positive), Direction::North);
        assert_eq!(Direction::South.rotated(Axis::X, Turn::Positive), Direction::Top);
        // About +Y, +Z goes to +X.
        assert_eq!(Direction::North.rotated(Axis::Y, Turn::Positive), Direction::East);
        assert_eq!(Direction::East.rotated(Axis::Y, Turn::Positive), Direction::South);
    }

    #[test]
    fn outward_faces_match_boundaries() {
        let size = CubeSize::new(3).unwrap();
        let corner = Coord3::new(2, 0, 2);
        assert!(Direction::East.points_outward(corner, size));
        assert!(Direction::Bottom.points_outward(corner, size));
        assert!(Direction::North.points_outward(corner, size));
        assert!(!Direction::West.points_outward(corner, size));
        assert!(!Direction::Top.points_outward(corner, size));
        assert!(!Direction::South.points_outward(corner, size));

        let center = Coord3::new(1, 1, 1);
        for d in Direction::ALL {
            assert!(!d.points_outward(center, size));
        }
    }

    #[test]
    fn turn_degrees_round_trip() {
        for t in [Turn::Positive, Turn::Negative] {
            assert_eq!(Turn::from_degrees(t.degrees()), Some(t));
            assert_eq!(t.inverse().inverse(), t);
        }
        assert_eq!(Turn::from_degrees(180), None);
        assert_eq!(Turn::Positive.to_string(), "+90");
        assert_eq!(Turn::Negative.to_string(), "-90");
    }
}
