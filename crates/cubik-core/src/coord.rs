//! Lattice coordinates and validated edge lengths.

use std::fmt;

use crate::direction::Axis;
use crate::error::GridError;

/// Integer position of a unit cube in the lattice.
///
/// Components are signed so that out-of-range requests (including negative
/// ones) can be expressed and rejected rather than wrapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord3 {
    /// West (0) → East (N-1).
    pub x: i32,
    /// Bottom (0) → Top (N-1).
    pub y: i32,
    /// South (0) → North (N-1).
    pub z: i32,
}

impl Coord3 {
    /// Build a coordinate from its components.
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// The component along `axis`.
    pub fn component(self, axis: Axis) -> i32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// A copy with the component along `axis` replaced.
    pub fn with_component(mut self, axis: Axis, value: i32) -> Self {
        match axis {
            Axis::X => self.x = value,
            Axis::Y => self.y = value,
            Axis::Z => self.z = value,
        }
        self
    }
}

impl fmt::Display for Coord3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl From<(i32, i32, i32)> for Coord3 {
    fn from((x, y, z): (i32, i32, i32)) -> Self {
        Self { x, y, z }
    }
}

/// Edge length of a cube lattice, guaranteed to lie in
/// [`CubeSize::MIN`]`..=`[`CubeSize::MAX`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CubeSize(u8);

impl CubeSize {
    /// Smallest supported edge length.
    pub const MIN: usize = 2;
    /// Largest supported edge length.
    pub const MAX: usize = 6;

    /// Validate an edge length.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidSize`] outside `2..=6`.
    pub fn new(size: usize) -> Result<Self, GridError> {
        if !(Self::MIN..=Self::MAX).contains(&size) {
            return Err(GridError::InvalidSize { requested: size });
        }
        Ok(Self(size as u8))
    }

    /// Every supported edge length, smallest first.
    pub fn all() -> impl Iterator<Item = CubeSize> {
        (Self::MIN..=Self::MAX).map(|n| CubeSize(n as u8))
    }

    /// The edge length.
    pub fn get(self) -> usize {
        self.0 as usize
    }

    /// Number of unit cubes in the lattice (`N³`).
    pub fn cell_count(self) -> usize {
        let n = self.get();
        n * n * n
    }

    /// Whether every component of `coord` lies in `[0, N)`.
    pub fn contains(self, coord: Coord3) -> bool {
        let n = self.0 as i32;
        (0..n).contains(&coord.x) && (0..n).contains(&coord.y) && (0..n).contains(&coord.z)
    }

    /// Row-major index `(x * N + y) * N + z`, or `None` if out of range.
    pub fn index_of(self, coord: Coord3) -> Option<usize> {
        if !self.contains(coord) {
            return None;
        }
        let n = self.get();
        Some((coord.x as usize * n + coord.y as usize) * n + coord.z as usize)
    }

    /// Inverse of [`CubeSize::index_of`]. `index` must be below
    /// [`CubeSize::cell_count`].
    pub fn coord_of(self, index: usize) -> Coord3 {
        let n = self.get();
        Coord3::new((index / (n * n)) as i32, ((index / n) % n) as i32, (index % n) as i32)
    }
}

impl fmt::Display for CubeSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{0}x{0}x{0}", self.0)
    }
}

impl TryFrom<usize> for CubeSize {
    type Error = GridError;

    fn try_from(size: usize) -> Result<Self, GridError> {
        CubeSize::new(size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn rejects_unsupported_sizes() {
        for bad in [0, 1, 7, 100] {
            assert_eq!(
                CubeSize::new(bad),
                Err(GridError::InvalidSize { requested: bad })
            );
        }
        assert_eq!(CubeSize::all().count(), 5);
    }

    #[test]
    fn index_is_row_major() {
        let size = CubeSize::new(3).unwrap();
        assert_eq!(size.index_of(Coord3::new(0, 0, 0)), Some(0));
        assert_eq!(size.index_of(Coord3::new(0, 0, 1)), Some(1));
        assert_eq!(size.index_of(Coord3::new(0, 1, 0)), Some(3));
        assert_eq!(size.index_of(Coord3::new(1, 0, 0)), Some(9));
        assert_eq!(size.index_of(Coord3::new(2, 2, 2)), Some(26));
    }

    #[test]
    fn out_of_range_has_no_index() {
        let size = CubeSize::new(2).unwrap();
        assert_eq!(size.index_of(Coord3::new(2, 0, 0)), None);
        assert_eq!(size.index_of(Coord3::new(0, -1, 0)), None);
        assert_eq!(size.index_of(Coord3::new(0, 0, 5)), None);
    }

    #[test]
    fn with_component_replaces_one_axis() {
        let c = Coord3::new(1, 2, 3);
        assert_eq!(c.with_component(Axis::Y, 0), Coord3::new(1, 0, 3));
        assert_eq!(c.component(Axis::Z), 3);
    }

    proptest! {
        #[test]
        fn index_and_coord_round_trip(n in 2usize..=6, raw in 0usize..216) {
            let size = CubeSize::new(n).unwrap();
            let index = raw % size.cell_count();
            let coord = size.coord_of(index);
            prop_assert!(size.contains(coord));
            prop_assert_eq!(size.index_of(coord), Some(index));
        }
    }
}
